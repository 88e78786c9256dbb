//! Sweep command implementation.
//!
//! Tabulates K_SSA for one tranche across a K_IRB grid and a set of
//! maturities.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use secirba_config::{ConfigManager, SweepConfig, Validate};
use secirba_formula::sweep::{sweep, ParameterMode, SweepResult};

use crate::cli::{Context, OutputFormat};
use crate::commands::{validate_positive, CalibrationArgs, TrancheArgs};
use crate::output::{format_value, print_grid, print_header, print_output, print_single};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub tranche: TrancheArgs,

    /// Base supervisory parameter; p(M) = p + step × M
    #[arg(short, long, conflicts_with = "calibrate")]
    pub p: Option<f64>,

    /// Calibrate p from the coefficient table at every grid point
    #[arg(long)]
    pub calibrate: bool,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Named grid preset (STANDARD, FINE_GRID, COARSE_GRID)
    #[arg(long)]
    pub preset: Option<String>,

    /// Smallest K_IRB on the grid
    #[arg(long)]
    pub k_min: Option<f64>,

    /// Largest K_IRB on the grid
    #[arg(long)]
    pub k_max: Option<f64>,

    /// Number of K_IRB values
    #[arg(long)]
    pub points: Option<usize>,

    /// Comma-separated maturities in years
    #[arg(long, value_delimiter = ',')]
    pub maturities: Option<Vec<u32>>,

    /// Increase of p per year of maturity
    #[arg(long)]
    pub step: Option<f64>,

    /// Disable parallel evaluation
    #[arg(long)]
    pub sequential: bool,
}

/// One sweep cell in long form.
#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    #[tabled(rename = "M")]
    maturity_years: u32,
    #[tabled(rename = "K_IRB")]
    kirb: f64,
    #[tabled(rename = "p")]
    p: f64,
    #[tabled(rename = "K_SSA")]
    kssa: f64,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;
    let config = resolve_config(&args, ctx)?;
    let tranche = args.tranche.resolve(defaults)?;

    let mode = if args.calibrate {
        ParameterMode::Calibrated(args.calibration.resolve(&defaults.calibration)?)
    } else {
        config.maturity_shift(validate_positive("p", args.p.unwrap_or(defaults.p))?)
    };

    let grid = config.grid();
    let result = sweep(&tranche, &grid, &mode, &config.options())?;
    info!(cells = grid.len(), config = %config.name, "sweep complete");

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(&format!(
                    "K_SSA Sweep [{}, {}]",
                    tranche.attachment, tranche.detachment
                ));
            }
            print_wide(&result);
            Ok(())
        }
        OutputFormat::Json => print_single(&result, ctx.format),
        OutputFormat::Csv | OutputFormat::Minimal => {
            let rows: Vec<SweepRow> = result
                .points()
                .map(|point| SweepRow {
                    maturity_years: point.maturity_years,
                    kirb: point.kirb,
                    p: point.p,
                    kssa: point.kssa,
                })
                .collect();
            print_output(&rows, ctx.format)
        }
    }
}

/// Starts from the preset or the configuration file, then applies flags.
fn resolve_config(args: &SweepArgs, ctx: &Context) -> Result<SweepConfig> {
    let mut config = match args.preset {
        Some(ref name) => ConfigManager::new().get_sweep(name)?,
        None => ctx.settings.sweep.clone(),
    };

    if let Some(k_min) = args.k_min {
        config.k_min = k_min;
    }
    if let Some(k_max) = args.k_max {
        config.k_max = k_max;
    }
    if let Some(points) = args.points {
        config.points = points;
    }
    if let Some(ref maturities) = args.maturities {
        config.maturities.clone_from(maturities);
    }
    if let Some(step) = args.step {
        config.maturity_step = step;
    }
    if args.sequential {
        config.parallel = false;
    }

    config.validate_or_error()?;
    Ok(config)
}

/// One row per K_IRB, one column per maturity.
fn print_wide(result: &SweepResult) {
    let mut header = vec!["K_IRB".to_string()];
    header.extend(result.curves.iter().map(|c| format!("M={}", c.maturity_years)));

    let k_values = result
        .curves
        .first()
        .map(|c| c.points.iter().map(|point| point.kirb).collect::<Vec<_>>())
        .unwrap_or_default();
    let rows = k_values
        .iter()
        .enumerate()
        .map(|(i, kirb)| {
            std::iter::once(format_value(*kirb))
                .chain(
                    result
                        .curves
                        .iter()
                        .filter_map(|c| c.points.get(i))
                        .map(|point| format_value(point.kssa)),
                )
                .collect()
        })
        .collect();

    print_grid(header, rows);
}
