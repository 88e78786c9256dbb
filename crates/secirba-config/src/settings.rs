//! Top-level configuration file.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::evaluation::EvaluationConfig;
use crate::sweep::SweepConfig;

/// Configuration loaded from a TOML or JSON file.
///
/// Every section is optional; missing values take their defaults.
///
/// ```toml
/// [evaluation]
/// attachment = 0.05
/// detachment = 0.30
///
/// [sweep]
/// points = 50
/// maturities = [1, 5]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecIrbaConfig {
    /// Evaluation defaults.
    pub evaluation: EvaluationConfig,
    /// Sweep grid.
    pub sweep: SweepConfig,
}

impl SecIrbaConfig {
    /// Loads and validates a configuration file.
    ///
    /// The format is chosen from the extension: `.toml` or `.json`.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        config.validate_or_error()?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses TOML without validating.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses JSON without validating.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Validate for SecIrbaConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let evaluation = self
            .evaluation
            .validate()
            .into_iter()
            .map(|e| e.in_section("evaluation"));
        let sweep = self
            .sweep
            .validate()
            .into_iter()
            .map(|e| e.in_section("sweep"));
        evaluation.chain(sweep).collect()
    }
}
