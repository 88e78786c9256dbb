//! CLI command implementations.

pub mod evaluate;
pub mod kirb;
pub mod kssa;
pub mod param;
pub mod sweep;
pub mod table;
pub mod weight;

// Re-export submodules for convenience
pub use evaluate::EvaluateArgs;
pub use kirb::KirbArgs;
pub use kssa::KssaArgs;
pub use param::ParamArgs;
pub use sweep::SweepArgs;
pub use table::TableArgs;
pub use weight::WeightArgs;

use clap::Args;

use secirba_config::{CalibrationConfig, EvaluationConfig};
use secirba_core::{ExposureType, Seniority, TranchePoints};
use secirba_formula::parameter::{ParameterInputs, MATURITY_YEARS};

use crate::error::{CliError, CliResult};

/// Tranche attachment and detachment, defaulting to the configuration.
#[derive(Args, Debug, Clone, Copy)]
pub struct TrancheArgs {
    /// Attachment point A (fraction of the pool)
    #[arg(long = "a")]
    pub attachment: Option<f64>,

    /// Detachment point D (fraction of the pool)
    #[arg(long = "d")]
    pub detachment: Option<f64>,
}

impl TrancheArgs {
    /// Resolves the tranche against configured defaults.
    pub fn resolve(&self, defaults: &EvaluationConfig) -> anyhow::Result<TranchePoints> {
        let attachment = validate_proportion(
            "attachment",
            self.attachment.unwrap_or(defaults.attachment),
        )?;
        let detachment = validate_proportion(
            "detachment",
            self.detachment.unwrap_or(defaults.detachment),
        )?;
        Ok(TranchePoints::new(attachment, detachment)?)
    }
}

/// Pool statistics for parameter calibration, defaulting to the configuration.
#[derive(Args, Debug, Clone, Copy)]
pub struct CalibrationArgs {
    /// Exposure type: retail or non-retail
    #[arg(long)]
    pub exposure: Option<ExposureType>,

    /// Seniority: senior or non-senior
    #[arg(long)]
    pub seniority: Option<Seniority>,

    /// Effective number of exposures N
    #[arg(long)]
    pub n: Option<f64>,

    /// Exposure-weighted average LGD (fraction)
    #[arg(long)]
    pub lgd: Option<f64>,

    /// Tranche maturity in years (1-5)
    #[arg(long)]
    pub maturity: Option<u32>,
}

impl CalibrationArgs {
    /// Resolves the inputs against configured defaults.
    pub fn resolve(&self, defaults: &CalibrationConfig) -> CliResult<ParameterInputs> {
        Ok(ParameterInputs {
            exposure_type: self.exposure.unwrap_or(defaults.exposure_type),
            seniority: self.seniority.unwrap_or(defaults.seniority),
            effective_count: validate_at_least(
                "n",
                self.n.unwrap_or(defaults.effective_count),
                1.0,
            )?,
            lgd: validate_proportion("lgd", self.lgd.unwrap_or(defaults.lgd))?,
            maturity_years: validate_maturity(self.maturity.unwrap_or(defaults.maturity_years))?,
        })
    }
}

/// Validates a value in [0, 1].
pub fn validate_proportion(name: &'static str, value: f64) -> CliResult<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CliError::InvalidProportion { name, value });
    }
    Ok(value)
}

/// Validates a strictly positive value.
pub fn validate_positive(name: &'static str, value: f64) -> CliResult<f64> {
    if !(value > 0.0) {
        return Err(CliError::NonPositive { name, value });
    }
    Ok(value)
}

/// Validates a value no smaller than `min`.
pub fn validate_at_least(name: &'static str, value: f64, min: f64) -> CliResult<f64> {
    if !(value >= min) {
        return Err(CliError::BelowMinimum { name, value, min });
    }
    Ok(value)
}

/// Validates a maturity in whole years.
pub fn validate_maturity(maturity: u32) -> CliResult<u32> {
    if !MATURITY_YEARS.contains(&maturity) {
        return Err(CliError::InvalidMaturity(maturity));
    }
    Ok(maturity)
}
