//! Pool capital charge (K_IRB).

use secirba_core::ExposurePool;

/// Minimum capital ratio applied to pool RWA (8%).
pub const CAPITAL_RATIO: f64 = 0.08;

/// Computes the pool capital charge K_IRB = (RWA / EAD) × 8%.
///
/// Returns `0.0` when `ead <= 0`. That value is a sentinel for a degenerate
/// pool, not a capital charge, and must not be fed into
/// [`compute_kssa`](crate::supervisory::compute_kssa).
///
/// # Example
///
/// ```rust
/// use secirba_formula::capital_base::compute_kirb;
///
/// assert!((compute_kirb(100.0, 100.0) - 0.08).abs() < 1e-15);
/// assert_eq!(compute_kirb(100.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn compute_kirb(rwa: f64, ead: f64) -> f64 {
    if ead <= 0.0 {
        return 0.0;
    }
    (rwa / ead) * CAPITAL_RATIO
}

/// Computes K_IRB for an [`ExposurePool`].
#[must_use]
pub fn compute_kirb_for_pool(pool: &ExposurePool) -> f64 {
    compute_kirb(pool.total_rwa, pool.total_ead)
}
