use anyhow::{Result, ensure};

use crate::err::Error;
use crate::fnc::util::math::mean::Mean;
use crate::val::Number;

pub fn mean(array: &[Number]) -> Result<Number> {
	ensure!(
		!array.is_empty(),
		Error::InvalidArgument {
			name: String::from("math::mean"),
			message: String::from("The list must not be empty."),
		}
	);
	Ok(array.mean().into())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case::full_sample(&[10, 20, 30, 40, 50], 30.0)]
	#[case::two_values(&[1, 2], 1.5)]
	#[case::single_value(&[5], 5.0)]
	fn mean_returns_the_float_average(#[case] input: &[i64], #[case] expected: f64) {
		let input: Vec<Number> = input.iter().copied().map(Number::from).collect();
		let result = mean(&input).unwrap();
		assert!(result.is_float());
		assert_eq!(result, Number::Float(expected));
	}

	#[test]
	fn mean_of_mixed_numbers() {
		let input = vec![Number::Int(1), Number::Float(2.5), Number::Int(2)];
		let result = mean(&input).unwrap();
		assert!(result.is_float());
		assert!((result.to_float() - 11.0 / 6.0).abs() < f64::EPSILON);
	}

	#[test]
	fn mean_of_an_empty_list_is_an_error() {
		let error = mean(&[]).unwrap_err();
		assert_eq!(
			error.to_string(),
			"Incorrect arguments for function math::mean(). The list must not be empty."
		);
	}

	#[test]
	fn mean_error_downcasts_to_invalid_argument() {
		let error = mean(&[]).unwrap_err();
		assert!(matches!(error.downcast_ref::<Error>(), Some(Error::InvalidArgument { .. })));
	}
}
