//! Pool classification and supervisory coefficients.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SecIrbaError;

/// Effective number of exposures at or above which a non-retail pool is granular.
pub const GRANULARITY_THRESHOLD: f64 = 25.0;

/// Exposure type of the underlying pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureType {
    /// Retail exposures (mortgages, consumer credit, SME retail).
    Retail,
    /// Wholesale / corporate exposures.
    NonRetail,
}

/// Seniority of the tranche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seniority {
    /// Senior tranche.
    Senior,
    /// Mezzanine or junior tranche.
    NonSenior,
}

/// Diversification of the underlying pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// Retail pool, or effective number of exposures N >= 25.
    Granular,
    /// Non-retail pool with N < 25.
    NonGranular,
}

impl Granularity {
    /// Derives granularity from the exposure type and effective number of exposures.
    #[must_use]
    pub fn derive(exposure_type: ExposureType, effective_count: f64) -> Self {
        if exposure_type == ExposureType::Retail || effective_count >= GRANULARITY_THRESHOLD {
            Granularity::Granular
        } else {
            Granularity::NonGranular
        }
    }
}

impl fmt::Display for ExposureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExposureType::Retail => "retail",
            ExposureType::NonRetail => "non-retail",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Seniority::Senior => "senior",
            Seniority::NonSenior => "non-senior",
        };
        write!(f, "{name}")
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Granular => "granular",
            Granularity::NonGranular => "non-granular",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ExposureType {
    type Err = SecIrbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "retail" => Ok(ExposureType::Retail),
            "non-retail" | "nonretail" | "wholesale" => Ok(ExposureType::NonRetail),
            _ => Err(SecIrbaError::invalid_input(format!(
                "unknown exposure type '{s}' (expected retail or non-retail)"
            ))),
        }
    }
}

impl FromStr for Seniority {
    type Err = SecIrbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "senior" => Ok(Seniority::Senior),
            "non-senior" | "nonsenior" | "junior" | "mezzanine" => Ok(Seniority::NonSenior),
            _ => Err(SecIrbaError::invalid_input(format!(
                "unknown seniority '{s}' (expected senior or non-senior)"
            ))),
        }
    }
}

/// Lookup key for the supervisory coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationKey {
    /// Exposure type.
    pub exposure_type: ExposureType,
    /// Seniority.
    pub seniority: Seniority,
    /// Granularity.
    pub granularity: Granularity,
}

impl fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.exposure_type, self.seniority, self.granularity
        )
    }
}

/// Full classification of a securitisation position.
///
/// Prefer [`Classification::derive`]: granularity is a function of the pool,
/// not a free choice. [`Classification::new`] accepts any combination and may
/// therefore produce one the coefficient table does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Exposure type of the underlying pool.
    pub exposure_type: ExposureType,
    /// Seniority of the tranche.
    pub seniority: Seniority,
    /// Granularity of the underlying pool.
    pub granularity: Granularity,
}

impl Classification {
    /// Creates a classification with an explicit granularity.
    #[must_use]
    pub fn new(exposure_type: ExposureType, seniority: Seniority, granularity: Granularity) -> Self {
        Self {
            exposure_type,
            seniority,
            granularity,
        }
    }

    /// Creates a classification whose granularity is derived from N.
    #[must_use]
    pub fn derive(exposure_type: ExposureType, seniority: Seniority, effective_count: f64) -> Self {
        Self::new(
            exposure_type,
            seniority,
            Granularity::derive(exposure_type, effective_count),
        )
    }

    /// Returns the coefficient lookup key.
    #[must_use]
    pub fn key(&self) -> ClassificationKey {
        ClassificationKey {
            exposure_type: self.exposure_type,
            seniority: self.seniority,
            granularity: self.granularity,
        }
    }
}

/// Calibration tuple `(A, B, C, D, E)` for the supervisory parameter
/// `p = A + B/N + C·K + D·LGD + E·M`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupervisoryCoefficients {
    /// Intercept.
    pub a: f64,
    /// Coefficient on 1/N.
    pub b: f64,
    /// Coefficient on K_IRB.
    pub c: f64,
    /// Coefficient on LGD.
    pub d: f64,
    /// Coefficient on maturity.
    pub e: f64,
}

impl SupervisoryCoefficients {
    /// Creates a coefficient tuple.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Self {
        Self { a, b, c, d, e }
    }
}

impl fmt::Display for SupervisoryCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.e
        )
    }
}
