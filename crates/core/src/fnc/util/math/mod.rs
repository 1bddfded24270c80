pub mod mean;

use crate::val::Number;

pub trait ToFloat {
	fn to_float(&self) -> f64;
}

impl ToFloat for Number {
	fn to_float(&self) -> f64 {
		self.to_float()
	}
}

impl ToFloat for f64 {
	fn to_float(&self) -> f64 {
		*self
	}
}

impl ToFloat for f32 {
	fn to_float(&self) -> f64 {
		*self as f64
	}
}

macro_rules! to_float_prim_ints {
	($($int: ty),*) => {
		$(
			impl ToFloat for $int {
				fn to_float(&self) -> f64 {
					*self as f64
				}
			}
		)*
	};
}

to_float_prim_ints!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
