mod cli_integration {
	// cargo test --package average --test cli -- cli_integration --nocapture

	use std::process::{Command, Output, Stdio};

	/// Run the binary and wait for it to finish
	fn run() -> Output {
		let mut path = std::env::current_exe().unwrap();
		assert!(path.pop());
		if path.ends_with("deps") {
			assert!(path.pop());
		}

		// Note: Cargo automatically builds this binary for integration tests.
		path.push(format!("{}{}", env!("CARGO_PKG_NAME"), std::env::consts::EXE_SUFFIX));

		let mut cmd = Command::new(path);
		cmd.env_remove("RUST_LOG");
		cmd.stdout(Stdio::piped());
		cmd.stderr(Stdio::piped());
		cmd.output().unwrap()
	}

	#[test]
	fn outputs_the_average_of_the_sample() {
		let output = run();
		assert!(output.status.success());
		assert_eq!(String::from_utf8(output.stdout).unwrap(), "The average is: 30.0\n");
	}
}
