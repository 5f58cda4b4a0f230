//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_tcping` library that handles:
//! - Command-line argument parsing and required-parameter validation
//! - Logger initialization
//! - Exit-code policy
//!
//! All measurement logic lives in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use dns_tcping::initialization::init_logger_with;
use dns_tcping::{run_diagnostics, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Required parameters are validated here instead of by clap so the
    // missing-parameter path prints the full usage text to stdout and exits
    // with status 1, before any network activity.
    if !config.has_required_params() {
        println!("Error: Missing required parameters");
        Config::command()
            .print_long_help()
            .context("Failed to print usage")?;
        process::exit(1);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Per-server failures are reported inline by the driver and do not
    // affect the exit code; once parameters validate, the run exits 0.
    run_diagnostics(config).await?;
    Ok(())
}
