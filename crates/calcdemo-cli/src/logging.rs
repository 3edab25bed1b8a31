//! Logging initialization and configuration.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the report on stdout stays clean.
///
/// # Errors
///
/// Returns an error if the log level is invalid or initialization fails.
pub fn init(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("failed to parse log level")?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    };
    // Ignore if already initialized
    result.ok();

    Ok(())
}
