//! Param command implementation.
//!
//! Calibrates the supervisory parameter from the coefficient table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use secirba_formula::parameter::P_FLOOR;

use crate::cli::Context;
use crate::commands::{validate_positive, CalibrationArgs};
use crate::output::{print_report, KeyValue};

/// Arguments for the param command.
#[derive(Args, Debug)]
pub struct ParamArgs {
    #[command(flatten)]
    pub calibration: CalibrationArgs,

    /// Pool capital charge K_IRB
    #[arg(short, long)]
    pub k: Option<f64>,
}

#[derive(Serialize)]
struct ParamRecord {
    exposure_type: String,
    seniority: String,
    granularity: String,
    coef_a: f64,
    coef_b: f64,
    coef_c: f64,
    coef_d: f64,
    coef_e: f64,
    p_raw: f64,
    p: f64,
    floor_binding: bool,
}

/// Execute the param command.
pub fn execute(args: ParamArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.settings.evaluation;
    let inputs = args.calibration.resolve(&defaults.calibration)?;
    let kirb = validate_positive("k", args.k.unwrap_or(defaults.kirb))?;

    let calibration = inputs.calibrate(kirb)?;
    let c = calibration.coefficients;

    let rows = vec![
        KeyValue::new("Classification", calibration.key.to_string()),
        KeyValue::new("Coefficients (A, B, C, D, E)", c.to_string()),
        KeyValue::from_value("N", inputs.effective_count),
        KeyValue::from_value("LGD", inputs.lgd),
        KeyValue::from_value("K_IRB", kirb),
        KeyValue::new("Maturity", format!("{} years", inputs.maturity_years)),
        KeyValue::from_value("p (raw)", calibration.raw),
        KeyValue::new(
            "p",
            if calibration.floor_binding() {
                format!("{:.6} (floor {})", calibration.p, P_FLOOR)
            } else {
                format!("{:.6}", calibration.p)
            },
        ),
    ];
    let record = ParamRecord {
        exposure_type: calibration.key.exposure_type.to_string(),
        seniority: calibration.key.seniority.to_string(),
        granularity: calibration.key.granularity.to_string(),
        coef_a: c.a,
        coef_b: c.b,
        coef_c: c.c,
        coef_d: c.d,
        coef_e: c.e,
        p_raw: calibration.raw,
        p: calibration.p,
        floor_binding: calibration.floor_binding(),
    };

    print_report(ctx, "Supervisory Parameter", &rows, &record, calibration.p)
}
