//! Domain types for securitisation capital analytics.
//!
//! This module provides value-type representations of the SEC-IRBA inputs
//! and outputs:
//!
//! - [`ExposurePool`]: Pool-level RWA and EAD
//! - [`TranchePoints`]: Attachment and detachment points
//! - [`Classification`]: Exposure type, seniority and derived granularity
//! - [`SupervisoryCoefficients`]: Calibration tuple for the parameter p
//! - [`TrancheRegime`] / [`RiskWeightResult`]: Classifier output

mod classification;
mod pool;
mod regime;
mod tranche;

pub use classification::{
    Classification, ClassificationKey, ExposureType, Granularity, Seniority,
    SupervisoryCoefficients, GRANULARITY_THRESHOLD,
};
pub use pool::ExposurePool;
pub use regime::{RiskWeightResult, TrancheRegime};
pub use tranche::TranchePoints;
