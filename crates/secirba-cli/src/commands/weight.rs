//! Weight command implementation.
//!
//! Classifies a tranche against K_IRB and computes the floored risk weight.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use secirba_formula::risk_weight::classify_and_weight_tranche;
use secirba_formula::supervisory::KSSA_CAP;

use crate::cli::Context;
use crate::commands::TrancheArgs;
use crate::output::{print_report, print_warning, KeyValue};

/// Arguments for the weight command.
#[derive(Args, Debug)]
pub struct WeightArgs {
    /// Pool capital charge K_IRB
    #[arg(short, long)]
    pub k: Option<f64>,

    /// Supervisory capital requirement K_SSA
    #[arg(long)]
    pub kssa: f64,

    #[command(flatten)]
    pub tranche: TrancheArgs,

    /// Exposure amount of the position
    #[arg(short, long)]
    pub exposure_amount: Option<f64>,
}

#[derive(Serialize)]
struct WeightRecord {
    regime: u8,
    unfloored_risk_weight: f64,
    risk_weight_percent: f64,
    floor_binding: bool,
    exposure_amount: f64,
    risk_weighted_amount: f64,
}

/// Execute the weight command.
pub fn execute(args: WeightArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;
    let kirb = args.k.unwrap_or(defaults.kirb);
    let tranche = args.tranche.resolve(defaults)?;
    let exposure_amount = args.exposure_amount.unwrap_or(defaults.exposure_amount);

    let result = classify_and_weight_tranche(kirb, args.kssa, &tranche);
    if !(0.0..=KSSA_CAP).contains(&args.kssa) {
        print_warning(
            ctx,
            &format!("K_SSA {} is outside [0, {}]", args.kssa, KSSA_CAP),
        );
    }
    let rwa = result.risk_weighted_amount(exposure_amount);

    let rows = vec![
        KeyValue::new("Regime", result.regime.to_string()),
        KeyValue::from_weight("Risk weight (unfloored)", result.unfloored_risk_weight),
        KeyValue::from_weight("Risk weight", result.risk_weight_percent),
        KeyValue::new("Floor binding", result.floor_binding().to_string()),
        KeyValue::from_value("Exposure amount", exposure_amount),
        KeyValue::from_value("Risk-weighted amount", rwa),
    ];
    let record = WeightRecord {
        regime: result.regime.number(),
        unfloored_risk_weight: result.unfloored_risk_weight,
        risk_weight_percent: result.risk_weight_percent,
        floor_binding: result.floor_binding(),
        exposure_amount,
        risk_weighted_amount: rwa,
    };

    print_report(ctx, "Risk Weight", &rows, &record, result.risk_weight_percent)
}
