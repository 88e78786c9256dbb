//! Kirb command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use secirba_core::ExposurePool;
use secirba_formula::capital_base::compute_kirb_for_pool;

use crate::cli::Context;
use crate::output::{print_report, print_warning, KeyValue};

/// Arguments for the kirb command.
#[derive(Args, Debug)]
pub struct KirbArgs {
    /// Total risk-weighted amount of the pool
    #[arg(long)]
    pub rwa: Option<f64>,

    /// Total exposure at default of the pool
    #[arg(long)]
    pub ead: Option<f64>,
}

#[derive(Serialize)]
struct KirbRecord {
    total_rwa: f64,
    total_ead: f64,
    kirb: f64,
    degenerate: bool,
}

/// Execute the kirb command.
pub fn execute(args: KirbArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;
    let pool = ExposurePool::new(
        args.rwa.unwrap_or(defaults.total_rwa),
        args.ead.unwrap_or(defaults.total_ead),
    );
    let kirb = compute_kirb_for_pool(&pool);

    if pool.is_degenerate() {
        print_warning(ctx, "EAD is not positive; K_IRB reported as 0");
    }

    let rows = vec![
        KeyValue::from_value("Total RWA", pool.total_rwa),
        KeyValue::from_value("Total EAD", pool.total_ead),
        KeyValue::from_value("K_IRB", kirb),
    ];
    let record = KirbRecord {
        total_rwa: pool.total_rwa,
        total_ead: pool.total_ead,
        kirb,
        degenerate: pool.is_degenerate(),
    };

    print_report(ctx, "Pool Capital Charge", &rows, &record, kirb)
}
