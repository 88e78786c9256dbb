//! Configuration error types.

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration not found.
    #[error("Configuration not found: {key}")]
    NotFound {
        /// The configuration key that was not found.
        key: String,
    },

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", format_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Lock poisoned or conflicting registration.
    #[error("Configuration conflict: {0}")]
    Conflict(String),

    /// Configuration is read-only.
    #[error("Configuration '{key}' is read-only")]
    ReadOnly {
        /// The read-only configuration key.
        key: String,
    },

    /// File could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents could not be parsed.
    #[error("Parse error in {format}: {message}")]
    Parse {
        /// Format being parsed (toml or json).
        format: &'static str,
        /// Parser message.
        message: String,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Prefixes the field with a section name.
    #[must_use]
    pub fn in_section(mut self, section: &str) -> Self {
        self.field = format!("{}.{}", section, self.field);
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            format: "json",
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            format: "toml",
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Parse {
            format: "toml",
            message: err.to_string(),
        }
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(Vec<ValidationError>);

    impl Validate for Always {
        fn validate(&self) -> Vec<ValidationError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_validate_or_error_variants() {
        assert!(Always(vec![]).validate_or_error().is_ok());

        let single = Always(vec![ValidationError::new("points", "too few")]);
        assert!(matches!(
            single.validate_or_error(),
            Err(ConfigError::Validation { ref field, .. }) if field == "points"
        ));

        let many = Always(vec![
            ValidationError::new("a", "x"),
            ValidationError::with_rule("b", "y", "rule_b"),
        ]);
        let err = many.validate_or_error().unwrap_err();
        assert!(err.to_string().contains("b: y (rule: rule_b)"));
    }

    #[test]
    fn test_in_section() {
        let err = ValidationError::new("k_min", "must be positive").in_section("sweep");
        assert_eq!(err.field, "sweep.k_min");
    }
}
