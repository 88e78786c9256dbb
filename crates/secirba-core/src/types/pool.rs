//! Underlying exposure pool.

use serde::{Deserialize, Serialize};

/// Pool-level inputs from which K_IRB is derived.
///
/// `total_ead <= 0` is tolerated; the capital charge resolves to the `0.0`
/// sentinel in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposurePool {
    /// Total risk-weighted assets of the underlying pool.
    pub total_rwa: f64,
    /// Total exposure at default of the underlying pool.
    pub total_ead: f64,
}

impl ExposurePool {
    /// Creates a new exposure pool.
    #[must_use]
    pub fn new(total_rwa: f64, total_ead: f64) -> Self {
        Self {
            total_rwa,
            total_ead,
        }
    }

    /// Returns true when EAD is non-positive and K_IRB resolves to the
    /// `0.0` sentinel.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.total_ead <= 0.0
    }
}
