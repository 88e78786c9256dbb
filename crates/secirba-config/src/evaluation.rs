//! Default inputs for tranche evaluation.

use serde::{Deserialize, Serialize};

use secirba_core::{ExposurePool, ExposureType, SecIrbaResult, Seniority, TranchePoints};
use secirba_formula::evaluate::{CapitalBase, EvaluationRequest, ParameterSource};
use secirba_formula::parameter::{ParameterInputs, MATURITY_YEARS};

use crate::error::{Validate, ValidationError};

/// Default inputs used when a request leaves a value unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Tranche attachment point A.
    pub attachment: f64,
    /// Tranche detachment point D.
    pub detachment: f64,
    /// Supervisory parameter p.
    pub p: f64,
    /// Pool capital charge K_IRB.
    pub kirb: f64,
    /// Total risk-weighted amount of the pool.
    pub total_rwa: f64,
    /// Total exposure at default of the pool.
    pub total_ead: f64,
    /// Exposure amount of the position.
    pub exposure_amount: f64,
    /// Inputs for calibrating p from the coefficient table.
    pub calibration: CalibrationConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            attachment: 0.20,
            detachment: 0.80,
            p: 0.50,
            kirb: 0.10,
            total_rwa: 100.0,
            total_ead: 100.0,
            exposure_amount: 100.0,
            calibration: CalibrationConfig::default(),
        }
    }
}

impl EvaluationConfig {
    /// Tranche built from the configured attachment and detachment.
    pub fn tranche(&self) -> SecIrbaResult<TranchePoints> {
        TranchePoints::new(self.attachment, self.detachment)
    }

    /// Pool built from the configured RWA and EAD.
    #[must_use]
    pub fn pool(&self) -> ExposurePool {
        ExposurePool::new(self.total_rwa, self.total_ead)
    }

    /// Request using the configured pool and the direct p.
    pub fn request(&self) -> SecIrbaResult<EvaluationRequest> {
        Ok(EvaluationRequest {
            capital_base: CapitalBase::Pool(self.pool()),
            tranche: self.tranche()?,
            parameter: ParameterSource::Direct(self.p),
            exposure_amount: self.exposure_amount,
        })
    }
}

impl Validate for EvaluationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.tranche() {
            errors.push(ValidationError::with_rule(
                "detachment",
                e.to_string(),
                "tranche_bounds",
            ));
        }

        if !(self.p > 0.0) {
            errors.push(ValidationError::new("p", "Supervisory parameter must be positive"));
        }

        if !(self.kirb > 0.0) {
            errors.push(ValidationError::new("kirb", "Capital base must be positive"));
        }

        if !(self.total_ead > 0.0) {
            errors.push(ValidationError::new("total_ead", "Pool EAD must be positive"));
        }

        if !(self.total_rwa >= 0.0) {
            errors.push(ValidationError::new("total_rwa", "Pool RWA cannot be negative"));
        }

        if !(self.exposure_amount >= 0.0) {
            errors.push(ValidationError::new(
                "exposure_amount",
                "Exposure amount cannot be negative",
            ));
        }

        errors.extend(
            self.calibration
                .validate()
                .into_iter()
                .map(|e| e.in_section("calibration")),
        );

        errors
    }
}

/// Pool statistics used to calibrate p.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Exposure type of the pool.
    pub exposure_type: ExposureType,
    /// Seniority of the tranche.
    pub seniority: Seniority,
    /// Effective number of exposures N.
    pub effective_count: f64,
    /// Exposure-weighted average LGD.
    pub lgd: f64,
    /// Tranche maturity in years.
    pub maturity_years: u32,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            exposure_type: ExposureType::NonRetail,
            seniority: Seniority::Senior,
            effective_count: 50.0,
            lgd: 0.45,
            maturity_years: 3,
        }
    }
}

impl From<CalibrationConfig> for ParameterInputs {
    fn from(config: CalibrationConfig) -> Self {
        ParameterInputs {
            exposure_type: config.exposure_type,
            seniority: config.seniority,
            effective_count: config.effective_count,
            lgd: config.lgd,
            maturity_years: config.maturity_years,
        }
    }
}

impl Validate for CalibrationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.effective_count >= 1.0) {
            errors.push(ValidationError::new(
                "effective_count",
                "Effective number of exposures must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.lgd) {
            errors.push(ValidationError::with_rule(
                "lgd",
                "LGD must be in [0, 1]",
                "unit_interval",
            ));
        }

        if !MATURITY_YEARS.contains(&self.maturity_years) {
            errors.push(ValidationError::new(
                "maturity_years",
                format!(
                    "Maturity must be between {} and {} years",
                    MATURITY_YEARS.start(),
                    MATURITY_YEARS.end()
                ),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secirba_formula::evaluate;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvaluationConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.attachment, 0.20);
        assert_eq!(config.detachment, 0.80);
        assert_eq!(config.p, 0.50);
    }

    #[test]
    fn test_inverted_tranche_rejected() {
        let config = EvaluationConfig {
            attachment: 0.5,
            detachment: 0.4,
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "detachment");
    }

    #[test]
    fn test_nested_calibration_errors_are_prefixed() {
        let config = EvaluationConfig {
            calibration: CalibrationConfig {
                lgd: 1.5,
                maturity_years: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["calibration.lgd", "calibration.maturity_years"]);
    }

    #[test]
    fn test_fractional_effective_count_rejected() {
        let config = CalibrationConfig {
            effective_count: 0.5,
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "effective_count");

        let one = CalibrationConfig {
            effective_count: 1.0,
            ..Default::default()
        };
        assert!(one.is_valid());
    }

    #[test]
    fn test_request_evaluates() {
        let request = EvaluationConfig::default().request().unwrap();
        // K_IRB = 0.08 <= A = 0.20
        let result = evaluate(&request).unwrap();
        assert_eq!(result.regime.number(), 1);
        assert_eq!(result.risk_weight_percent, 15.0);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: EvaluationConfig = serde_json::from_str(r#"{"p": 0.7}"#).unwrap();
        assert_eq!(config.p, 0.7);
        assert_eq!(config.kirb, 0.10);
        assert_eq!(config.calibration, CalibrationConfig::default());
    }
}
