//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Value outside [0, 1].
    #[error("Invalid {name}: {value}. Must be between 0 and 1.")]
    InvalidProportion {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Value that must be strictly positive.
    #[error("Invalid {name}: {value}. Must be positive.")]
    NonPositive {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Value below its lower bound.
    #[error("Invalid {name}: {value}. Must be at least {min}.")]
    BelowMinimum {
        /// Argument name.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Smallest accepted value.
        min: f64,
    },

    /// Maturity outside the calibrated range.
    #[error("Invalid maturity: {0}. Must be between 1 and 5 years.")]
    InvalidMaturity(u32),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
