//! Supervisory formula (K_SSA).
//!
//! ```text
//! a = -1 / (p · K_IRB)
//! u = D - K_IRB
//! l = max(A, K_IRB)
//! K_SSA = (e^(a·u) - e^(a·l)) / (a · (u - l))
//! ```
//!
//! The kernel is unstable for small `p · K_IRB` and wide tranches. Two cases
//! resolve to `1.0` instead of a computed value:
//!
//! - `u == l`: the quotient is 0/0.
//! - an exponent above `ln(f64::MAX)`, or any non-finite quotient.
//!
//! Every other result is clamped to `[0.0, 1.5]`.

use log::debug;

use secirba_core::{SecIrbaError, SecIrbaResult, TranchePoints};

/// Upper bound of the K_SSA clamp.
pub const KSSA_CAP: f64 = 1.5;

/// Value returned for the degenerate interval and on exponential overflow.
pub const SATURATED_KSSA: f64 = 1.0;

/// Largest argument for which `f64::exp` is finite, `ln(f64::MAX)`.
pub const MAX_EXP_ARG: f64 = 709.782_712_893_384;

/// Computes the supervisory capital requirement K_SSA for a tranche.
///
/// # Errors
///
/// Returns [`SecIrbaError::Domain`] when `kirb <= 0` or `p <= 0` (including
/// NaN), since `p · K_IRB` is the divisor of the kernel scale.
///
/// # Example
///
/// ```rust
/// use secirba_formula::supervisory::compute_kssa;
///
/// let kssa = compute_kssa(0.10, 0.05, 0.30, 0.5).unwrap();
/// assert!((kssa - 0.0585).abs() < 1e-4);
///
/// assert!(compute_kssa(0.0, 0.05, 0.30, 0.5).is_err());
/// ```
#[allow(clippy::float_cmp)]
pub fn compute_kssa(kirb: f64, attachment: f64, detachment: f64, p: f64) -> SecIrbaResult<f64> {
    if !(kirb > 0.0) {
        return Err(SecIrbaError::domain(format!(
            "non-positive capital base (K_IRB = {kirb})"
        )));
    }
    if !(p > 0.0) {
        return Err(SecIrbaError::domain(format!(
            "non-positive supervisory parameter (p = {p})"
        )));
    }

    let scale = kernel_scale(kirb, p);
    let upper = detachment - kirb;
    let lower = attachment.max(kirb);

    if upper == lower {
        debug!("degenerate K_SSA interval at u = l = {upper}; saturating");
        return Ok(SATURATED_KSSA);
    }

    let upper_arg = scale * upper;
    let lower_arg = scale * lower;
    // Negated comparison so NaN arguments also saturate.
    if !(upper_arg <= MAX_EXP_ARG && lower_arg <= MAX_EXP_ARG) {
        debug!(
            "K_SSA exponent overflow (a·u = {upper_arg}, a·l = {lower_arg}); saturating"
        );
        return Ok(SATURATED_KSSA);
    }

    let raw = (upper_arg.exp() - lower_arg.exp()) / (scale * (upper - lower));
    if !raw.is_finite() {
        debug!("non-finite K_SSA quotient {raw}; saturating");
        return Ok(SATURATED_KSSA);
    }

    Ok(raw.clamp(0.0, KSSA_CAP))
}

/// Computes K_SSA for [`TranchePoints`].
pub fn compute_kssa_for_tranche(kirb: f64, tranche: &TranchePoints, p: f64) -> SecIrbaResult<f64> {
    compute_kssa(kirb, tranche.attachment, tranche.detachment, p)
}

/// Kernel scale `a = -1 / (p · K_IRB)`.
#[must_use]
pub fn kernel_scale(kirb: f64, p: f64) -> f64 {
    -1.0 / (p * kirb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mezzanine_value() {
        // a = -20, u = 0.20, l = 0.10
        let expected = ((-4.0_f64).exp() - (-2.0_f64).exp()) / -2.0;
        let kssa = compute_kssa(0.10, 0.05, 0.30, 0.5).unwrap();
        assert_relative_eq!(kssa, expected, epsilon = 1e-12);
        assert_relative_eq!(kssa, 0.058509, epsilon = 1e-5);
    }

    #[test]
    fn test_kernel_scale() {
        assert_relative_eq!(kernel_scale(0.10, 0.5), -20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_kirb_is_domain_error() {
        for k in [0.0, -0.1, f64::NAN] {
            let err = compute_kssa(k, 0.05, 0.30, 0.5).unwrap_err();
            assert!(err.is_domain());
            assert!(err.to_string().contains("non-positive capital base"));
        }
    }

    #[test]
    fn test_non_positive_p_is_domain_error() {
        let err = compute_kssa(0.1, 0.05, 0.30, 0.0).unwrap_err();
        assert!(err.to_string().contains("supervisory parameter"));
    }

    #[test]
    fn test_degenerate_interval() {
        // u = 0.5 - 0.25 = 0.25 = max(0.0, 0.25) = l
        assert_eq!(compute_kssa(0.25, 0.0, 0.5, 0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_overflow_saturates() {
        // a = -2000, u = -0.4: a·u = 800 > ln(f64::MAX)
        assert_eq!(compute_kssa(0.5, 0.0, 0.1, 0.001).unwrap(), SATURATED_KSSA);
    }

    #[test]
    fn test_senior_thin_tranche_near_zero() {
        let kssa = compute_kssa(0.01, 0.90, 0.95, 0.3).unwrap();
        assert!(kssa >= 0.0);
        assert!(kssa < 1e-12);
    }

    #[test]
    fn test_upper_clamp() {
        // Tranche inside the capital charge: the kernel exceeds the cap.
        let kssa = compute_kssa(0.5, 0.0, 0.1, 0.3).unwrap();
        assert_eq!(kssa, KSSA_CAP);
    }

    #[test]
    fn test_tranche_wrapper() {
        let tranche = TranchePoints::new(0.05, 0.30).unwrap();
        assert_eq!(
            compute_kssa_for_tranche(0.10, &tranche, 0.5).unwrap(),
            compute_kssa(0.10, 0.05, 0.30, 0.5).unwrap()
        );
    }
}
