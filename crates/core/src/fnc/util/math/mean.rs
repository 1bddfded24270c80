use crate::fnc::util::math::ToFloat;
use crate::val::Number;

/// The arithmetic mean of a collection of numbers.
pub trait Mean {
	/// Returns the arithmetic mean, which is NaN for an empty collection.
	fn mean(&self) -> f64;
}

impl Mean for Vec<Number> {
	fn mean(&self) -> f64 {
		self.as_slice().mean()
	}
}

impl<T> Mean for &[T]
where
	T: ToFloat,
{
	fn mean(&self) -> f64 {
		let len = self.len() as f64;
		let sum = self.iter().map(|n| n.to_float()).sum::<f64>();

		// Will be NaN if len is 0
		sum / len
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mean_of_numbers() {
		let values = vec![Number::Int(10), Number::Int(20), Number::Int(30)];
		assert_eq!(values.mean(), 20.0);
	}

	#[test]
	fn mean_of_mixed_numbers() {
		let values = vec![Number::Int(1), Number::Float(2.0)];
		assert_eq!(values.mean(), 1.5);
	}

	#[test]
	fn mean_of_floats() {
		let values: &[f64] = &[1.0, 2.0, 3.0, 4.0];
		assert_eq!(values.mean(), 2.5);
	}

	#[test]
	fn mean_of_ints() {
		let values: &[i32] = &[5, 10];
		assert_eq!(values.mean(), 7.5);
	}

	#[test]
	fn mean_of_nothing_is_nan() {
		let values: Vec<Number> = Vec::new();
		assert!(values.mean().is_nan());
	}
}
