use std::process::ExitCode;

use anyhow::Result;
use average_core::fnc;
use average_core::val::Number;

use crate::cnf::RELEASE;

pub fn init() -> ExitCode {
	// Initialize the logging and tracing layers
	if let Err(error) = crate::telemetry::builder().with_log_level("warn").init() {
		eprintln!("There was a problem initializing the logging layer: {error}");
		return ExitCode::FAILURE;
	}
	// Log the release identifier of this build
	info!("Running {}", *RELEASE);
	// Run the computation and output any error
	match run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			error!("{error}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<()> {
	// The fixed sample of numbers to average
	let numbers: Vec<Number> = vec![
		Number::from(10),
		Number::from(20),
		Number::from(30),
		Number::from(40),
		Number::from(50),
	];
	// Calculate the arithmetic mean of the sample
	let average = fnc::math::mean(&numbers)?;
	// Output the result
	println!("The average is: {average}");
	Ok(())
}
