/// Matches on a specific config environment
macro_rules! get_cfg {
	($i:ident : $($s:expr_2021),+) => (
		let $i = || { $( if cfg!($i=$s) { return $s; } );+ "unknown"};
	)
}

#[cfg(test)]
mod test {
	#[test]
	fn get_cfg_detects_the_target_family() {
		get_cfg!(target_family: "unix", "windows", "wasm");
		assert_ne!(target_family(), "unknown");
	}
}
