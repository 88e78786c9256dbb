//! # SecIrba Formula
//!
//! The SEC-IRBA formula engine of CRR Art. 259 for a single securitisation
//! tranche.
//!
//! This crate provides:
//!
//! - **Capital base**: pool capital charge K_IRB from RWA and EAD
//! - **Parameter**: supervisory parameter p from the coefficient table
//! - **Supervisory formula**: K_SSA with degenerate-interval and overflow guards
//! - **Risk weight**: regime classification and the 15 floor
//! - **Evaluation**: the four steps composed for one request
//! - **Sweep**: K_SSA over a K_IRB × maturity grid
//!
//! ## Pipeline
//!
//! ```text
//! (RWA, EAD) ──► K_IRB ─┬──────────────────────────┐
//!                       ▼                          ▼
//! classification ──► p ──► K_SSA(K, A, D, p) ──► (regime, RW, RWA)
//! ```
//!
//! Every function is pure. Evaluating the same inputs twice returns
//! bit-identical outputs.
//!
//! ## Example
//!
//! ```rust
//! use secirba_formula::prelude::*;
//!
//! let kirb = compute_kirb(125.0, 100.0);
//! let kssa = compute_kssa(kirb, 0.05, 0.30, 0.5).unwrap();
//! let rw = classify_and_weight(kirb, kssa, 0.05, 0.30);
//!
//! assert_eq!(rw.regime, TrancheRegime::Straddling);
//! assert!(rw.risk_weight_percent >= RISK_WEIGHT_FLOOR);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::uninlined_format_args)]

pub mod capital_base;
pub mod evaluate;
pub mod parameter;
pub mod risk_weight;
pub mod supervisory;
pub mod sweep;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::capital_base::{compute_kirb, compute_kirb_for_pool, CAPITAL_RATIO};
    pub use crate::evaluate::{
        evaluate, CapitalBase, EvaluationRequest, ParameterSource, TrancheEvaluation,
    };
    pub use crate::parameter::{
        calibrate, calibrate_p, Calibration, ParameterInputs, SupervisoryParameterTable, P_FLOOR,
    };
    pub use crate::risk_weight::{
        classify, classify_and_weight, RISK_WEIGHT_FLOOR, RISK_WEIGHT_MULTIPLIER,
    };
    pub use crate::supervisory::{compute_kssa, KSSA_CAP, SATURATED_KSSA};
    pub use crate::sweep::{sweep, ParameterMode, SweepGrid, SweepOptions, SweepResult};
    pub use secirba_core::prelude::*;
}

pub use capital_base::compute_kirb;
pub use evaluate::evaluate;
pub use parameter::calibrate_p;
pub use risk_weight::classify_and_weight;
pub use supervisory::compute_kssa;
