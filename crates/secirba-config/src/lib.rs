//! # SecIrba Config
//!
//! Configuration for the SecIrba formula engine.
//!
//! - [`EvaluationConfig`]: default tranche, pool and parameter inputs
//! - [`SweepConfig`]: K_IRB grid, maturities and execution options
//! - [`SecIrbaConfig`]: both sections, loaded from TOML or JSON
//! - [`ConfigManager`]: named sweep configurations with read-only presets
//!
//! ## Example
//!
//! ```rust
//! use secirba_config::prelude::*;
//!
//! let manager = ConfigManager::new();
//! let standard = manager.get_sweep("STANDARD").unwrap();
//! assert_eq!(standard.grid().len(), 1_000);
//!
//! let config = SecIrbaConfig::from_toml_str("[sweep]\npoints = 10\n").unwrap();
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod evaluation;
pub mod manager;
pub mod settings;
pub mod sweep;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use evaluation::{CalibrationConfig, EvaluationConfig};
pub use manager::ConfigManager;
pub use settings::SecIrbaConfig;
pub use sweep::SweepConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::evaluation::{CalibrationConfig, EvaluationConfig};
    pub use crate::manager::ConfigManager;
    pub use crate::settings::SecIrbaConfig;
    pub use crate::sweep::SweepConfig;
}
