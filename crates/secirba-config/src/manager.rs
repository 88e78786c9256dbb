//! Registry of named sweep configurations.

use std::collections::HashMap;
use std::sync::RwLock;

use log::debug;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::sweep::SweepConfig;

/// Holds named sweep configurations, seeded with the read-only presets.
#[derive(Debug)]
pub struct ConfigManager {
    sweeps: RwLock<HashMap<String, SweepConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Creates a manager containing the `STANDARD`, `FINE_GRID` and
    /// `COARSE_GRID` presets.
    pub fn new() -> Self {
        let sweeps = [
            SweepConfig::standard(),
            SweepConfig::fine_grid(),
            SweepConfig::coarse_grid(),
        ]
        .into_iter()
        .map(|config| (config.name.clone(), config))
        .collect();

        Self {
            sweeps: RwLock::new(sweeps),
        }
    }

    /// Gets a sweep configuration by name.
    pub fn get_sweep(&self, name: &str) -> ConfigResult<SweepConfig> {
        let sweeps = self
            .sweeps
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        sweeps.get(name).cloned().ok_or_else(|| ConfigError::NotFound {
            key: name.to_string(),
        })
    }

    /// Registers a sweep configuration, replacing any non-read-only entry of
    /// the same name.
    pub fn register_sweep(&self, config: SweepConfig) -> ConfigResult<()> {
        config.validate_or_error()?;

        let mut sweeps = self
            .sweeps
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        if sweeps.get(&config.name).is_some_and(|existing| existing.read_only) {
            return Err(ConfigError::ReadOnly { key: config.name });
        }

        debug!("registered sweep configuration {}", config.name);
        sweeps.insert(config.name.clone(), config);
        Ok(())
    }

    /// Lists registered configuration names in sorted order.
    pub fn list_sweeps(&self) -> ConfigResult<Vec<String>> {
        let sweeps = self
            .sweeps
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        let mut names: Vec<_> = sweeps.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_present() {
        let manager = ConfigManager::new();
        assert_eq!(
            manager.list_sweeps().unwrap(),
            vec!["COARSE_GRID", "FINE_GRID", "STANDARD"]
        );
        assert_eq!(manager.get_sweep("FINE_GRID").unwrap().points, 2_000);
    }

    #[test]
    fn test_register_and_get() {
        let manager = ConfigManager::new();
        let config = SweepConfig::new("desk").with_range(0.02, 0.2, 10);
        manager.register_sweep(config.clone()).unwrap();
        assert_eq!(manager.get_sweep("desk").unwrap(), config);

        // Non-read-only entries can be replaced.
        manager
            .register_sweep(SweepConfig::new("desk").with_range(0.02, 0.2, 20))
            .unwrap();
        assert_eq!(manager.get_sweep("desk").unwrap().points, 20);
    }

    #[test]
    fn test_preset_is_read_only() {
        let manager = ConfigManager::new();
        let err = manager
            .register_sweep(SweepConfig::new("STANDARD"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadOnly { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let manager = ConfigManager::new();
        let err = manager
            .register_sweep(SweepConfig::new("bad").with_range(0.1, 0.2, 0))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
        assert!(manager.get_sweep("bad").is_err());
    }

    #[test]
    fn test_not_found() {
        let manager = ConfigManager::new();
        assert!(matches!(
            manager.get_sweep("missing"),
            Err(ConfigError::NotFound { ref key }) if key == "missing"
        ));
    }
}
