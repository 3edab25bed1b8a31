//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Sample calculator and user registry
///
/// Runs the demo scenario: an addition, a person, a calculator with
/// history and a user registry, printing the results to stdout.
#[derive(Debug, Parser)]
#[command(name = "calcdemo")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to a scenario file
    ///
    /// If not specified, searches for calcdemo.toml in:
    /// 1. $CALCDEMO_CONFIG environment variable
    /// 2. Current directory
    /// 3. ~/.config/calcdemo/calcdemo.toml
    ///
    /// Falls back to the built-in scenario.
    #[arg(short, long, value_name = "FILE", env = "CALCDEMO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level
    ///
    /// Valid values: trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn", env = "CALCDEMO_LOG")]
    pub log_level: String,

    /// Output logs as JSON (for structured logging)
    #[arg(long, default_value = "false", env = "CALCDEMO_LOG_JSON")]
    pub log_json: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}
