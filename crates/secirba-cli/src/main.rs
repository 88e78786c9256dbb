//! SecIrba CLI - SEC-IRBA securitisation capital calculator.
//!
//! # Usage
//!
//! ```bash
//! # Pool capital charge
//! secirba kirb --rwa 125 --ead 100
//!
//! # Supervisory formula for a mezzanine tranche
//! secirba kssa --k 0.10 --a 0.05 --d 0.30 --p 0.5
//!
//! # Full evaluation with a calibrated parameter
//! secirba evaluate --k 0.10 --a 0.05 --d 0.30 --calibrate --exposure retail --n 30
//!
//! # K_SSA across K_IRB and maturity
//! secirba sweep --a 0.20 --d 0.80 --preset COARSE_GRID --format csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use secirba_config::SecIrbaConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match cli.config {
        Some(ref path) => SecIrbaConfig::from_file(path)?,
        None => SecIrbaConfig::default(),
    };

    let ctx = cli::Context {
        format: cli.format,
        quiet: cli.quiet,
        settings,
    };
    debug!(format = ?ctx.format, "executing command");

    match cli.command {
        Commands::Kirb(args) => commands::kirb::execute(args, &ctx)?,
        Commands::Param(args) => commands::param::execute(args, &ctx)?,
        Commands::Kssa(args) => commands::kssa::execute(args, &ctx)?,
        Commands::Weight(args) => commands::weight::execute(args, &ctx)?,
        Commands::Evaluate(args) => commands::evaluate::execute(args, &ctx)?,
        Commands::Sweep(args) => commands::sweep::execute(args, &ctx)?,
        Commands::Table(args) => commands::table::execute(args, &ctx)?,
    }

    Ok(())
}
