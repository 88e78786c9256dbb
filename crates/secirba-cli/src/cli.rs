//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use secirba_config::SecIrbaConfig;

use crate::commands::{
    EvaluateArgs, KirbArgs, KssaArgs, ParamArgs, SweepArgs, TableArgs, WeightArgs,
};

/// SecIrba - SEC-IRBA securitisation capital calculator
#[derive(Parser)]
#[command(name = "secirba")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (.toml or .json) supplying default inputs
    #[arg(short, long, global = true, env = "SECIRBA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the pool capital charge K_IRB from RWA and EAD
    Kirb(KirbArgs),

    /// Calibrate the supervisory parameter p
    Param(ParamArgs),

    /// Compute the supervisory capital requirement K_SSA
    Kssa(KssaArgs),

    /// Classify a tranche and compute its risk weight
    Weight(WeightArgs),

    /// Evaluate a tranche end to end
    Evaluate(EvaluateArgs),

    /// Sweep K_SSA over a K_IRB x maturity grid
    Sweep(SweepArgs),

    /// Print the supervisory coefficient table
    Table(TableArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Settings shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and warnings.
    pub quiet: bool,
    /// Defaults loaded from the configuration file.
    pub settings: SecIrbaConfig,
}
