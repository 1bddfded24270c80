use thiserror::Error;

/// An error originating from the numeric computation library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The wrong quantity or magnitude of arguments was given for the specified
	/// function
	#[error("Incorrect arguments for function {name}(). {message}")]
	InvalidArgument {
		name: String,
		message: String,
	},
}
