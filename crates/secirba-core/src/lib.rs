//! # SecIrba Core
//!
//! Core types and the error taxonomy for the SecIrba securitisation capital
//! library (CRR Art. 259, SEC-IRBA).
//!
//! This crate provides the building blocks shared by the formula engine,
//! the configuration layer and the CLI:
//!
//! - **Types**: `ExposurePool`, `TranchePoints`, `Classification`,
//!   `SupervisoryCoefficients`, `TrancheRegime`, `RiskWeightResult`
//! - **Errors**: `SecIrbaError` with distinct domain, classification and
//!   input variants
//!
//! ## Design Philosophy
//!
//! - **Value Types**: Everything is constructed per evaluation and never mutated
//! - **Explicit Over Implicit**: Derived quantities (granularity) are computed,
//!   not chosen
//!
//! ## Example
//!
//! ```rust
//! use secirba_core::prelude::*;
//!
//! let pool = ExposurePool::new(100.0, 0.0);
//! assert!(pool.is_degenerate());
//!
//! let class = Classification::derive(ExposureType::NonRetail, Seniority::Senior, 10.0);
//! assert_eq!(class.granularity, Granularity::NonGranular);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SecIrbaError, SecIrbaResult};
    pub use crate::types::{
        Classification, ClassificationKey, ExposurePool, ExposureType, Granularity,
        RiskWeightResult, Seniority, SupervisoryCoefficients, TranchePoints, TrancheRegime,
        GRANULARITY_THRESHOLD,
    };
}

// Re-export commonly used types at crate root
pub use error::{SecIrbaError, SecIrbaResult};
pub use types::{
    Classification, ClassificationKey, ExposurePool, ExposureType, Granularity, RiskWeightResult,
    Seniority, SupervisoryCoefficients, TranchePoints, TrancheRegime,
};
