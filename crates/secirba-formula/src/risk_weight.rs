//! Tranche classification and risk weight.
//!
//! The regime is determined by where K_IRB falls relative to the tranche,
//! tested in this order:
//!
//! - regime 1, `K_IRB <= A`: `RW = 12.5 · K_SSA`
//! - regime 3, `K_IRB >= D`: `RW = 12.5`
//! - regime 2, otherwise: `RW = 12.5 · K_SSA · (D - K)/(D - A) + 12.5 · (K - A)/(D - A)`
//!
//! The most punitive weight belongs to a tranche lying entirely within the
//! pool capital charge (regime 3), as in CRR Art. 259(1). The portion of a
//! straddling tranche below K_IRB takes the same weight, the portion above it
//! takes the supervisory formula weight. The result is floored at 15.

use secirba_core::{RiskWeightResult, TranchePoints, TrancheRegime};

/// Multiplier converting a capital requirement into a risk weight.
pub const RISK_WEIGHT_MULTIPLIER: f64 = 12.5;

/// Regulatory floor on the risk weight.
pub const RISK_WEIGHT_FLOOR: f64 = 15.0;

/// Determines the tranche regime.
///
/// # Example
///
/// ```rust
/// use secirba_core::TrancheRegime;
/// use secirba_formula::risk_weight::classify;
///
/// assert_eq!(classify(0.10, 0.05, 0.30), TrancheRegime::Straddling);
/// assert_eq!(classify(0.35, 0.05, 0.30), TrancheRegime::WithinCapital);
/// ```
#[must_use]
pub fn classify(kirb: f64, attachment: f64, detachment: f64) -> TrancheRegime {
    if kirb <= attachment {
        TrancheRegime::AboveCapital
    } else if kirb >= detachment {
        TrancheRegime::WithinCapital
    } else {
        TrancheRegime::Straddling
    }
}

/// Classifies the tranche and computes its floored risk weight.
///
/// The bounds are taken as given; see [`TranchePoints::new_unchecked`].
#[must_use]
pub fn classify_and_weight(
    kirb: f64,
    kssa: f64,
    attachment: f64,
    detachment: f64,
) -> RiskWeightResult {
    classify_and_weight_tranche(
        kirb,
        kssa,
        &TranchePoints::new_unchecked(attachment, detachment),
    )
}

/// Classifies and weights a tranche given as [`TranchePoints`].
#[must_use]
pub fn classify_and_weight_tranche(
    kirb: f64,
    kssa: f64,
    tranche: &TranchePoints,
) -> RiskWeightResult {
    let TranchePoints {
        attachment,
        detachment,
    } = *tranche;
    let regime = classify(kirb, attachment, detachment);
    let unfloored = match regime {
        TrancheRegime::AboveCapital => RISK_WEIGHT_MULTIPLIER * kssa,
        TrancheRegime::WithinCapital => RISK_WEIGHT_MULTIPLIER,
        TrancheRegime::Straddling => {
            let thickness = tranche.thickness();
            RISK_WEIGHT_MULTIPLIER * kssa * (detachment - kirb) / thickness
                + RISK_WEIGHT_MULTIPLIER * (kirb - attachment) / thickness
        }
    };

    RiskWeightResult {
        regime,
        // f64::max drops a NaN operand, so the floor holds for NaN inputs too.
        risk_weight_percent: unfloored.max(RISK_WEIGHT_FLOOR),
        unfloored_risk_weight: unfloored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regime_boundaries() {
        assert_eq!(classify(0.05, 0.05, 0.30), TrancheRegime::AboveCapital);
        assert_eq!(classify(0.30, 0.05, 0.30), TrancheRegime::WithinCapital);
        assert_eq!(classify(0.0, 0.0, 0.30), TrancheRegime::AboveCapital);
        assert_eq!(classify(0.2, 0.05, 0.30), TrancheRegime::Straddling);
    }

    #[test]
    fn test_above_capital_weight() {
        let result = classify_and_weight(0.05, 1.5, 0.10, 0.30);
        assert_eq!(result.regime, TrancheRegime::AboveCapital);
        assert_relative_eq!(result.risk_weight_percent, 18.75, epsilon = 1e-12);
        assert!(!result.floor_binding());
    }

    #[test]
    fn test_within_capital_weight_is_floored() {
        let result = classify_and_weight(0.35, 0.52, 0.05, 0.30);
        assert_eq!(result.regime, TrancheRegime::WithinCapital);
        assert_relative_eq!(result.unfloored_risk_weight, 12.5);
        assert_eq!(result.risk_weight_percent, RISK_WEIGHT_FLOOR);
    }

    #[test]
    fn test_straddling_blend() {
        let kssa = 0.058509;
        let result = classify_and_weight(0.10, kssa, 0.05, 0.30);
        let expected = 12.5 * kssa * 0.8 + 12.5 * 0.2;
        assert_eq!(result.regime, TrancheRegime::Straddling);
        assert_relative_eq!(result.unfloored_risk_weight, expected, epsilon = 1e-12);
        assert_relative_eq!(result.unfloored_risk_weight, 3.085, epsilon = 1e-3);
        assert_eq!(result.risk_weight_percent, 15.0);
        assert!(result.floor_binding());
    }

    #[test]
    fn test_straddling_blend_above_floor() {
        // 12.5 · 1.5 · 0.5 + 12.5 · 0.5
        let result = classify_and_weight(0.25, 1.5, 0.0, 0.5);
        assert_relative_eq!(result.risk_weight_percent, 15.625, epsilon = 1e-12);
    }

    #[test]
    fn test_tranche_and_raw_bounds_agree() {
        let tranche = TranchePoints::new(0.05, 0.30).unwrap();
        let kssa = 0.058509;
        assert_eq!(
            classify_and_weight_tranche(0.10, kssa, &tranche),
            classify_and_weight(0.10, kssa, 0.05, 0.30)
        );
    }

    #[test]
    fn test_nan_kssa_still_floored() {
        let result = classify_and_weight(0.05, f64::NAN, 0.10, 0.30);
        assert_eq!(result.risk_weight_percent, RISK_WEIGHT_FLOOR);
    }
}
