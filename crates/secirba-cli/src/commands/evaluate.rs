//! Evaluate command implementation.
//!
//! Runs the capital base, parameter, supervisory formula and classifier for
//! one tranche.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use secirba_core::ExposurePool;
use secirba_formula::evaluate::{evaluate, CapitalBase, EvaluationRequest, ParameterSource};

use crate::cli::Context;
use crate::commands::{validate_positive, CalibrationArgs, TrancheArgs};
use crate::output::{print_report, KeyValue};

/// Arguments for the evaluate command.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Pool capital charge K_IRB. Defaults to RWA/EAD of the pool.
    #[arg(short, long, conflicts_with_all = ["rwa", "ead"])]
    pub k: Option<f64>,

    /// Total risk-weighted amount of the pool
    #[arg(long)]
    pub rwa: Option<f64>,

    /// Total exposure at default of the pool
    #[arg(long)]
    pub ead: Option<f64>,

    #[command(flatten)]
    pub tranche: TrancheArgs,

    /// Supervisory parameter p
    #[arg(short, long, conflicts_with = "calibrate")]
    pub p: Option<f64>,

    /// Calibrate p from the coefficient table
    #[arg(long)]
    pub calibrate: bool,

    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Exposure amount of the position
    #[arg(short, long)]
    pub exposure_amount: Option<f64>,
}

#[derive(Serialize)]
struct EvaluateRecord {
    kirb: f64,
    attachment: f64,
    detachment: f64,
    p: f64,
    p_raw: Option<f64>,
    kssa: f64,
    regime: u8,
    unfloored_risk_weight: f64,
    risk_weight_percent: f64,
    exposure_amount: f64,
    risk_weighted_amount: f64,
}

/// Execute the evaluate command.
pub fn execute(args: EvaluateArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;

    let capital_base = match args.k {
        Some(k) => CapitalBase::Direct(validate_positive("k", k)?),
        None => CapitalBase::Pool(ExposurePool::new(
            args.rwa.unwrap_or(defaults.total_rwa),
            args.ead.unwrap_or(defaults.total_ead),
        )),
    };

    let parameter = if args.calibrate {
        ParameterSource::Calibrated(args.calibration.resolve(&defaults.calibration)?)
    } else {
        ParameterSource::Direct(validate_positive("p", args.p.unwrap_or(defaults.p))?)
    };

    let request = EvaluationRequest {
        capital_base,
        tranche: args.tranche.resolve(defaults)?,
        parameter,
        exposure_amount: args.exposure_amount.unwrap_or(defaults.exposure_amount),
    };
    let result = evaluate(&request)?;
    info!(
        regime = result.regime.number(),
        risk_weight = result.risk_weight_percent,
        "tranche evaluated"
    );

    let mut rows = vec![
        KeyValue::from_value("K_IRB", result.kirb),
        KeyValue::new(
            "Tranche",
            format!("[{}, {}]", request.tranche.attachment, request.tranche.detachment),
        ),
    ];
    if let Some(calibration) = result.calibration {
        rows.push(KeyValue::new("Classification", calibration.key.to_string()));
        rows.push(KeyValue::from_value("p (raw)", calibration.raw));
    }
    rows.extend([
        KeyValue::from_value("p", result.p),
        KeyValue::from_value("K_SSA", result.kssa),
        KeyValue::new("Regime", result.regime.to_string()),
        KeyValue::from_weight("Risk weight (unfloored)", result.unfloored_risk_weight),
        KeyValue::from_weight("Risk weight", result.risk_weight_percent),
        KeyValue::from_value("Exposure amount", result.exposure_amount),
        KeyValue::from_value("Risk-weighted amount", result.risk_weighted_amount),
    ]);

    let record = EvaluateRecord {
        kirb: result.kirb,
        attachment: request.tranche.attachment,
        detachment: request.tranche.detachment,
        p: result.p,
        p_raw: result.calibration.map(|c| c.raw),
        kssa: result.kssa,
        regime: result.regime.number(),
        unfloored_risk_weight: result.unfloored_risk_weight,
        risk_weight_percent: result.risk_weight_percent,
        exposure_amount: result.exposure_amount,
        risk_weighted_amount: result.risk_weighted_amount,
    };

    print_report(
        ctx,
        "Tranche Evaluation",
        &rows,
        &record,
        result.risk_weight_percent,
    )
}
