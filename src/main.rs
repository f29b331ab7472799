//! fishincome - Expected hourly income estimator for AFK fishing farms
//!
//! Main entry point for the command-line tool.
//!
//! # Execution Flow
//!
//! 1. Parse flags (one per [`EstimatorConfig`](fishincome::EstimatorConfig) field, plus `--debug`)
//! 2. Initialize logging to stderr
//! 3. Log advisory warnings about the configuration, if any
//! 4. Compute the estimate
//! 5. Print the resolved configuration and the report to stdout
//!
//! Malformed flag values are reported by clap and exit with status 2 before
//! anything is computed.

use anyhow::Result;
use clap::Parser;
use fishincome::{APP_NAME, Cli, VERSION, compute, diagnose, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    fishincome::logging::setup_logging(cli.debug)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config = cli.estimator_config();
    for warning in diagnose(&config) {
        tracing::warn!("{}", warning);
    }

    let report = compute(&config);

    let stdout = std::io::stdout();
    render::write_output(&mut stdout.lock(), &config, &report)?;

    Ok(())
}
