//! End-to-end tranche evaluation.
//!
//! Composes the capital base, parameter calibration, supervisory formula and
//! classifier for one fully specified request. Each call is independent.

use log::debug;
use serde::{Deserialize, Serialize};

use secirba_core::{ExposurePool, SecIrbaError, SecIrbaResult, TranchePoints, TrancheRegime};

use crate::capital_base::compute_kirb_for_pool;
use crate::parameter::{Calibration, ParameterInputs};
use crate::risk_weight::classify_and_weight_tranche;
use crate::supervisory::compute_kssa_for_tranche;

/// Source of the pool capital charge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalBase {
    /// K_IRB supplied directly.
    Direct(f64),
    /// K_IRB derived from pool RWA and EAD.
    Pool(ExposurePool),
}

/// Source of the supervisory parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterSource {
    /// p supplied directly.
    Direct(f64),
    /// p calibrated from the coefficient table.
    Calibrated(ParameterInputs),
}

/// A fully specified evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Pool capital charge.
    pub capital_base: CapitalBase,
    /// Tranche attachment and detachment.
    pub tranche: TranchePoints,
    /// Supervisory parameter.
    pub parameter: ParameterSource,
    /// Exposure amount used for the RWA figure.
    pub exposure_amount: f64,
}

/// Outputs of a tranche evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrancheEvaluation {
    /// Pool capital charge K_IRB.
    pub kirb: f64,
    /// Supervisory parameter p.
    pub p: f64,
    /// Calibration details when p was calibrated.
    pub calibration: Option<Calibration>,
    /// Supervisory capital requirement K_SSA.
    pub kssa: f64,
    /// Tranche regime.
    pub regime: TrancheRegime,
    /// Risk weight after the floor.
    pub risk_weight_percent: f64,
    /// Risk weight before the floor.
    pub unfloored_risk_weight: f64,
    /// Exposure amount of the position.
    pub exposure_amount: f64,
    /// Risk-weighted exposure amount, `RW × exposure / 100`.
    pub risk_weighted_amount: f64,
}

/// Evaluates a tranche.
///
/// # Errors
///
/// - [`SecIrbaError::Domain`] when the capital base is the EAD <= 0 sentinel,
///   or K_IRB / p is otherwise non-positive.
/// - [`SecIrbaError::UnsupportedClassification`] from calibration.
///
/// # Example
///
/// ```rust
/// use secirba_core::{ExposurePool, TranchePoints, TrancheRegime};
/// use secirba_formula::evaluate::{evaluate, CapitalBase, EvaluationRequest, ParameterSource};
///
/// let request = EvaluationRequest {
///     capital_base: CapitalBase::Pool(ExposurePool::new(125.0, 100.0)),
///     tranche: TranchePoints::new(0.05, 0.30).unwrap(),
///     parameter: ParameterSource::Direct(0.5),
///     exposure_amount: 100.0,
/// };
/// let result = evaluate(&request).unwrap();
/// assert_eq!(result.regime, TrancheRegime::Straddling);
/// assert_eq!(result.risk_weight_percent, 15.0);
/// ```
pub fn evaluate(request: &EvaluationRequest) -> SecIrbaResult<TrancheEvaluation> {
    let kirb = resolve_capital_base(&request.capital_base)?;

    let (p, calibration) = match request.parameter {
        ParameterSource::Direct(p) => (p, None),
        ParameterSource::Calibrated(inputs) => {
            let calibration = inputs.calibrate(kirb)?;
            (calibration.p, Some(calibration))
        }
    };

    let kssa = compute_kssa_for_tranche(kirb, &request.tranche, p)?;
    let weight = classify_and_weight_tranche(kirb, kssa, &request.tranche);

    debug!(
        "evaluated tranche [{}, {}]: K_IRB = {kirb}, p = {p}, K_SSA = {kssa}, regime {}",
        request.tranche.attachment,
        request.tranche.detachment,
        weight.regime.number()
    );

    Ok(TrancheEvaluation {
        kirb,
        p,
        calibration,
        kssa,
        regime: weight.regime,
        risk_weight_percent: weight.risk_weight_percent,
        unfloored_risk_weight: weight.unfloored_risk_weight,
        exposure_amount: request.exposure_amount,
        risk_weighted_amount: weight.risk_weighted_amount(request.exposure_amount),
    })
}

/// Resolves K_IRB, rejecting the degenerate-pool sentinel.
pub fn resolve_capital_base(capital_base: &CapitalBase) -> SecIrbaResult<f64> {
    match capital_base {
        CapitalBase::Direct(kirb) => Ok(*kirb),
        CapitalBase::Pool(pool) if pool.is_degenerate() => Err(SecIrbaError::domain(format!(
            "pool EAD is non-positive ({}); K_IRB is undefined",
            pool.total_ead
        ))),
        CapitalBase::Pool(pool) => Ok(compute_kirb_for_pool(pool)),
    }
}
