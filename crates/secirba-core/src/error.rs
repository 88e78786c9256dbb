//! Error types for the SecIrba library.
//!
//! Only true precondition violations and unsupported lookups are errors.
//! Floating-point edge cases that arise from the formulas themselves are
//! resolved locally by the formula engine and never reach this type.

use thiserror::Error;

use crate::types::{ExposureType, Granularity, Seniority};

/// A specialized Result type for SecIrba operations.
pub type SecIrbaResult<T> = Result<T, SecIrbaError>;

/// The main error type for SecIrba operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SecIrbaError {
    /// A formula precondition was violated (e.g. a non-positive capital base).
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the violated precondition.
        reason: String,
    },

    /// No supervisory coefficient tuple exists for the classification.
    #[error(
        "Unsupported classification: {exposure_type} / {seniority} / {granularity} has no supervisory coefficients"
    )]
    UnsupportedClassification {
        /// Exposure type of the rejected key.
        exposure_type: ExposureType,
        /// Seniority of the rejected key.
        seniority: Seniority,
        /// Granularity of the rejected key.
        granularity: Granularity,
    },

    /// Attachment/detachment points violate `0 <= A < D <= 1`.
    #[error("Invalid tranche [{attachment}, {detachment}]: {reason}")]
    InvalidTranche {
        /// Attachment point A.
        attachment: f64,
        /// Detachment point D.
        detachment: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl SecIrbaError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported classification error.
    #[must_use]
    pub fn unsupported_classification(
        exposure_type: ExposureType,
        seniority: Seniority,
        granularity: Granularity,
    ) -> Self {
        Self::UnsupportedClassification {
            exposure_type,
            seniority,
            granularity,
        }
    }

    /// Creates an invalid tranche error.
    #[must_use]
    pub fn invalid_tranche(attachment: f64, detachment: f64, reason: impl Into<String>) -> Self {
        Self::InvalidTranche {
            attachment,
            detachment,
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true for precondition violations of the supervisory formula.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}
