//! Kssa command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use secirba_formula::supervisory::compute_kssa_for_tranche;

use crate::cli::Context;
use crate::commands::{validate_positive, TrancheArgs};
use crate::output::{print_report, KeyValue};

/// Arguments for the kssa command.
#[derive(Args, Debug)]
pub struct KssaArgs {
    /// Pool capital charge K_IRB
    #[arg(short, long)]
    pub k: Option<f64>,

    #[command(flatten)]
    pub tranche: TrancheArgs,

    /// Supervisory parameter p
    #[arg(short, long)]
    pub p: Option<f64>,
}

#[derive(Serialize)]
struct KssaRecord {
    kirb: f64,
    attachment: f64,
    detachment: f64,
    p: f64,
    kssa: f64,
}

/// Execute the kssa command.
pub fn execute(args: KssaArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;
    let kirb = validate_positive("k", args.k.unwrap_or(defaults.kirb))?;
    let p = validate_positive("p", args.p.unwrap_or(defaults.p))?;
    let tranche = args.tranche.resolve(defaults)?;

    let kssa = compute_kssa_for_tranche(kirb, &tranche, p)?;

    let rows = vec![
        KeyValue::from_value("K_IRB", kirb),
        KeyValue::new(
            "Tranche",
            format!("[{}, {}]", tranche.attachment, tranche.detachment),
        ),
        KeyValue::from_value("p", p),
        KeyValue::from_value("K_SSA", kssa),
    ];
    let record = KssaRecord {
        kirb,
        attachment: tranche.attachment,
        detachment: tranche.detachment,
        p,
        kssa,
    };

    print_report(ctx, "Supervisory Formula", &rows, &record, kssa)
}
