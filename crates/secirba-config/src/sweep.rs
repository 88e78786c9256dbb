//! Sweep grid configuration.

use serde::{Deserialize, Serialize};

use secirba_formula::sweep::{ParameterMode, SweepGrid, SweepOptions, DEFAULT_MATURITY_STEP};

use crate::error::{Validate, ValidationError};

/// Sweep configuration.
///
/// Describes the K_IRB grid, the maturities and how p varies with maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Configuration name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Smallest K_IRB on the grid.
    pub k_min: f64,
    /// Largest K_IRB on the grid.
    pub k_max: f64,
    /// Number of K_IRB values.
    pub points: usize,
    /// Maturities in years, one curve each.
    pub maturities: Vec<u32>,
    /// Increase of p per year of maturity.
    pub maturity_step: f64,
    /// Evaluate the grid in parallel when large enough.
    pub parallel: bool,
    /// Minimum number of grid cells for parallel evaluation.
    pub parallel_threshold: usize,
    /// Read-only presets cannot be replaced in the manager.
    #[serde(skip)]
    pub read_only: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let grid = SweepGrid::default();
        let options = SweepOptions::default();
        Self {
            name: "default".to_string(),
            description: None,
            k_min: grid.k_min,
            k_max: grid.k_max,
            points: grid.points,
            maturities: grid.maturities,
            maturity_step: DEFAULT_MATURITY_STEP,
            parallel: options.parallel,
            parallel_threshold: options.parallel_threshold,
            read_only: false,
        }
    }
}

impl SweepConfig {
    /// Creates a new configuration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Standard grid: 200 points over [0.01, 0.30], maturities 1 to 5.
    pub fn standard() -> Self {
        Self {
            name: "STANDARD".to_string(),
            description: Some("200 points over [0.01, 0.30], maturities 1-5".to_string()),
            read_only: true,
            ..Default::default()
        }
    }

    /// Fine grid for charting.
    pub fn fine_grid() -> Self {
        Self {
            name: "FINE_GRID".to_string(),
            description: Some("2000 points over [0.001, 0.50], maturities 1-5".to_string()),
            k_min: 0.001,
            k_max: 0.50,
            points: 2_000,
            read_only: true,
            ..Default::default()
        }
    }

    /// Coarse grid for quick checks.
    pub fn coarse_grid() -> Self {
        Self {
            name: "COARSE_GRID".to_string(),
            description: Some("30 points over [0.01, 0.30], maturities 1, 3, 5".to_string()),
            points: 30,
            maturities: vec![1, 3, 5],
            read_only: true,
            ..Default::default()
        }
    }

    /// Sets the K_IRB range and point count.
    #[must_use]
    pub fn with_range(mut self, k_min: f64, k_max: f64, points: usize) -> Self {
        self.k_min = k_min;
        self.k_max = k_max;
        self.points = points;
        self
    }

    /// Grid described by this configuration.
    #[must_use]
    pub fn grid(&self) -> SweepGrid {
        SweepGrid::new(self.k_min, self.k_max, self.points).with_maturities(self.maturities.clone())
    }

    /// Execution options described by this configuration.
    #[must_use]
    pub fn options(&self) -> SweepOptions {
        SweepOptions {
            parallel: self.parallel,
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Maturity-shift mode starting from `base_p`.
    #[must_use]
    pub fn maturity_shift(&self, base_p: f64) -> ParameterMode {
        ParameterMode::MaturityShift {
            base_p,
            step: self.maturity_step,
        }
    }
}

impl Validate for SweepConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if !(self.k_min > 0.0) {
            errors.push(ValidationError::new("k_min", "Smallest K_IRB must be positive"));
        }

        if !(self.k_max > self.k_min) {
            errors.push(ValidationError::with_rule(
                "k_max",
                "Largest K_IRB must exceed the smallest",
                "ordered_range",
            ));
        }

        if self.points < 2 {
            errors.push(ValidationError::new("points", "Grid needs at least 2 points"));
        }

        if self.maturities.is_empty() {
            errors.push(ValidationError::new(
                "maturities",
                "At least one maturity is required",
            ));
        }

        if !self.maturity_step.is_finite() {
            errors.push(ValidationError::new(
                "maturity_step",
                "Maturity step must be finite",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SweepConfig::standard(),
            SweepConfig::fine_grid(),
            SweepConfig::coarse_grid(),
        ] {
            assert!(config.is_valid(), "{} invalid", config.name);
            assert!(config.read_only);
            assert!(config.grid().validate().is_ok());
        }
    }

    #[test]
    fn test_standard_matches_default_grid() {
        assert_eq!(SweepConfig::standard().grid(), SweepGrid::default());
        assert_eq!(SweepConfig::standard().options(), SweepOptions::default());
    }

    #[test]
    fn test_invalid_range() {
        let config = SweepConfig::new("bad").with_range(0.0, -1.0, 1);
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["k_min", "k_max", "points"]);
    }

    #[test]
    fn test_empty_range_rejected() {
        let config = SweepConfig::new("flat").with_range(0.1, 0.1, 10);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "k_max");
        assert!(config.grid().validate().is_err());
    }

    #[test]
    fn test_maturity_shift_uses_step() {
        let config = SweepConfig {
            maturity_step: 0.1,
            ..Default::default()
        };
        let mode = config.maturity_shift(0.4);
        let p = mode.parameter(0.1, 2).unwrap();
        assert!((p - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_read_only_not_serialized() {
        let json = serde_json::to_string(&SweepConfig::standard()).unwrap();
        assert!(!json.contains("read_only"));
        let back: SweepConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.read_only);
        assert_eq!(back.points, 200);
    }
}
