//! calcdemo - sample calculator and user registry
//!
//! This binary runs the demo scenario against calcdemo-core and prints
//! the resulting report.

use anyhow::{Context, Result};
use clap::Parser;

mod args;
mod logging;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level, args.log_json)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting calcdemo");

    let config = if let Some(config_path) = &args.config {
        calcdemo_core::DemoConfig::load_from(config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        calcdemo_core::DemoConfig::load().context("failed to load configuration")?
    };

    tracing::debug!(
        people = config.people.len(),
        calculations = config.calculations.len(),
        "configuration loaded"
    );

    let report = calcdemo_core::run_demo(&config);

    if args.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        print!("{report}");
    }

    Ok(())
}
