//! Tranche attachment and detachment points.

use serde::{Deserialize, Serialize};

use crate::error::{SecIrbaError, SecIrbaResult};

/// A tranche bounded by attachment point A and detachment point D, both
/// expressed as fractions of pool notional.
///
/// The formula engine assumes `0 <= A < D <= 1` without checking it. Use
/// [`TranchePoints::new`] at input boundaries to enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranchePoints {
    /// Attachment point A.
    pub attachment: f64,
    /// Detachment point D.
    pub detachment: f64,
}

impl TranchePoints {
    /// Creates validated tranche points.
    pub fn new(attachment: f64, detachment: f64) -> SecIrbaResult<Self> {
        if !attachment.is_finite() || !detachment.is_finite() {
            return Err(SecIrbaError::invalid_tranche(
                attachment,
                detachment,
                "points must be finite",
            ));
        }
        if !(0.0..1.0).contains(&attachment) {
            return Err(SecIrbaError::invalid_tranche(
                attachment,
                detachment,
                "attachment must lie in [0, 1)",
            ));
        }
        if detachment <= attachment || detachment > 1.0 {
            return Err(SecIrbaError::invalid_tranche(
                attachment,
                detachment,
                "detachment must lie in (A, 1]",
            ));
        }
        Ok(Self {
            attachment,
            detachment,
        })
    }

    /// Creates tranche points without validation.
    #[must_use]
    pub fn new_unchecked(attachment: f64, detachment: f64) -> Self {
        Self {
            attachment,
            detachment,
        }
    }

    /// Tranche thickness D − A.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.detachment - self.attachment
    }
}
