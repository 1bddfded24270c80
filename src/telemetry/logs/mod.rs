use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

pub fn new<S>(log_level: String) -> Box<dyn Layer<S> + Send + Sync>
where
	S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync,
{
	// Configure
	#[cfg(not(debug_assertions))]
	{
		tracing_subscriber::fmt::layer()
			.compact()
			.with_ansi(true)
			.with_file(false)
			.with_target(true)
			.with_line_number(false)
			.with_thread_ids(false)
			.with_thread_names(false)
			.with_span_events(FmtSpan::NONE)
			.with_writer(std::io::stderr)
			.with_filter(filter(log_level))
			.boxed()
	}
	#[cfg(debug_assertions)]
	{
		tracing_subscriber::fmt::layer()
			.compact()
			.with_ansi(true)
			.with_file(true)
			.with_target(true)
			.with_line_number(true)
			.with_thread_ids(false)
			.with_thread_names(false)
			.with_span_events(FmtSpan::NONE)
			.with_writer(std::io::stderr)
			.with_filter(filter(log_level))
			.boxed()
	}
}

fn filter(log_level: String) -> EnvFilter {
	// Let RUST_LOG take precedence over the requested level
	if std::env::var("RUST_LOG").is_ok() {
		return EnvFilter::from_default_env();
	}
	// Parse the requested level, falling back to warnings and above
	crate::telemetry::filter_from_value(log_level.as_str())
		.unwrap_or_else(|_| EnvFilter::default().add_directive(Level::WARN.into()))
}
