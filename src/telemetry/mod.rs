mod logs;

use anyhow::Result;
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Default, Debug, Clone)]
pub struct Builder {
	log_level: Option<String>,
}

pub fn builder() -> Builder {
	Builder::default()
}

impl Builder {
	/// Set the log level on the builder
	pub fn with_log_level(mut self, log_level: &str) -> Self {
		self.log_level = Some(log_level.to_string());
		self
	}

	/// Build a tracing dispatcher with the fmt subscriber
	pub fn build(self) -> Box<dyn Subscriber + Send + Sync + 'static> {
		let registry = tracing_subscriber::registry();
		let registry = registry.with(self.log_level.map(logs::new));
		Box::new(registry)
	}

	/// Install the tracing dispatcher globally
	pub fn init(self) -> Result<()> {
		self.build().try_init()?;
		Ok(())
	}
}

/// Create an environment filter for a log level or a custom filter string
pub fn filter_from_value(v: &str) -> Result<EnvFilter, ParseError> {
	match v {
		// Don't show any logs at all
		"none" => Ok(EnvFilter::default()),
		// Check if we should show all log levels
		"full" => Ok(EnvFilter::default().add_directive(Level::TRACE.into())),
		// Otherwise, let's only show errors
		"error" => Ok(EnvFilter::default().add_directive(Level::ERROR.into())),
		// Otherwise, let's show warnings and above
		"warn" => Ok(EnvFilter::default().add_directive(Level::WARN.into())),
		// Otherwise, let's show info and above
		"info" => Ok(EnvFilter::default().add_directive(Level::INFO.into())),
		// Otherwise, let's show debugs and above
		"debug" => EnvFilter::builder().parse("warn,average=debug,average_core=debug"),
		// Specify the log level for each code area
		"trace" => EnvFilter::builder().parse("warn,average=trace,average_core=trace"),
		// Let's try to parse the custom log level
		_ => EnvFilter::builder().parse(v),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_levels_parse() {
		assert_eq!(filter_from_value("info").unwrap().to_string(), "info");
		assert_eq!(filter_from_value("error").unwrap().to_string(), "error");
	}

	#[test]
	fn custom_filters_parse() {
		let filter = filter_from_value("average=debug").unwrap();
		assert_eq!(filter.to_string(), "average=debug");
	}

	#[test]
	fn invalid_filters_are_rejected() {
		assert!(filter_from_value("this is not a filter").is_err());
	}
}
