//! Tracing subscriber setup for the binary.

use clap::ValueEnum;
use tracing_subscriber::{EnvFilter, fmt};

/// Output style of log events on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One flattened JSON object per event.
    Json,
}

/// Install the global subscriber; `RUST_LOG` overrides the `info` default.
///
/// Logs go to stderr so stdout stays free for command output.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Pretty => builder.with_target(false).init(),
        LogFormat::Json => builder.json().flatten_event(true).init(),
    }
}
