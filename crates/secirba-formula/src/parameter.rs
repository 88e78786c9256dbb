//! Supervisory parameter calibration.
//!
//! The parameter `p` controls the curvature of the supervisory formula.
//! It is calibrated from a fixed coefficient table keyed by the pool
//! classification:
//!
//! ```text
//! p = max(0.3, A + B/N + C·K_IRB + D·LGD + E·M)
//! ```
//!
//! | Exposure | Seniority | Granularity | A | B | C | D | E |
//! |----------|-----------|-------------|------|------|-------|------|------|
//! | Non-retail | Senior | Granular | 0.00 | 3.56 | -1.85 | 0.55 | 0.07 |
//! | Non-retail | Senior | Non-granular | 0.11 | 2.61 | -2.91 | 0.68 | 0.07 |
//! | Non-retail | Non-senior | Granular | 0.16 | 2.87 | -1.03 | 0.21 | 0.07 |
//! | Non-retail | Non-senior | Non-granular | 0.22 | 2.35 | -2.46 | 0.48 | 0.07 |
//! | Retail | Senior | Granular | 0.00 | 0.00 | -7.48 | 0.71 | 0.24 |
//! | Retail | Non-senior | Granular | 0.00 | 0.00 | -5.78 | 0.55 | 0.27 |
//!
//! Retail pools are always granular, so retail / non-granular has no entry.

use serde::{Deserialize, Serialize};

use secirba_core::{
    Classification, ClassificationKey, ExposureType, Granularity, SecIrbaError, SecIrbaResult,
    Seniority, SupervisoryCoefficients,
};

/// Regulatory floor on the supervisory parameter.
pub const P_FLOOR: f64 = 0.3;

/// Tranche maturities (years) covered by the calibration.
pub const MATURITY_YEARS: std::ops::RangeInclusive<u32> = 1..=5;

const NON_RETAIL_SENIOR_GRANULAR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.0, 3.56, -1.85, 0.55, 0.07);
const NON_RETAIL_SENIOR_NON_GRANULAR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.11, 2.61, -2.91, 0.68, 0.07);
const NON_RETAIL_NON_SENIOR_GRANULAR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.16, 2.87, -1.03, 0.21, 0.07);
const NON_RETAIL_NON_SENIOR_NON_GRANULAR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.22, 2.35, -2.46, 0.48, 0.07);
const RETAIL_SENIOR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.0, 0.0, -7.48, 0.71, 0.24);
const RETAIL_NON_SENIOR: SupervisoryCoefficients =
    SupervisoryCoefficients::new(0.0, 0.0, -5.78, 0.55, 0.27);

/// The fixed supervisory coefficient table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupervisoryParameterTable;

impl SupervisoryParameterTable {
    /// Looks up the coefficient tuple for a classification key.
    ///
    /// Returns [`SecIrbaError::UnsupportedClassification`] for combinations
    /// outside the table.
    pub fn lookup(key: ClassificationKey) -> SecIrbaResult<SupervisoryCoefficients> {
        use ExposureType::{NonRetail, Retail};
        use Granularity::{Granular, NonGranular};
        use Seniority::{NonSenior, Senior};

        match (key.exposure_type, key.seniority, key.granularity) {
            (NonRetail, Senior, Granular) => Ok(NON_RETAIL_SENIOR_GRANULAR),
            (NonRetail, Senior, NonGranular) => Ok(NON_RETAIL_SENIOR_NON_GRANULAR),
            (NonRetail, NonSenior, Granular) => Ok(NON_RETAIL_NON_SENIOR_GRANULAR),
            (NonRetail, NonSenior, NonGranular) => Ok(NON_RETAIL_NON_SENIOR_NON_GRANULAR),
            (Retail, Senior, Granular) => Ok(RETAIL_SENIOR),
            (Retail, NonSenior, Granular) => Ok(RETAIL_NON_SENIOR),
            (Retail, seniority, NonGranular) => Err(SecIrbaError::unsupported_classification(
                Retail,
                seniority,
                NonGranular,
            )),
        }
    }

    /// All defined table entries, in display order.
    pub fn entries() -> [(ClassificationKey, SupervisoryCoefficients); 6] {
        let key = |exposure_type, seniority, granularity| ClassificationKey {
            exposure_type,
            seniority,
            granularity,
        };
        [
            (
                key(ExposureType::NonRetail, Seniority::Senior, Granularity::Granular),
                NON_RETAIL_SENIOR_GRANULAR,
            ),
            (
                key(ExposureType::NonRetail, Seniority::Senior, Granularity::NonGranular),
                NON_RETAIL_SENIOR_NON_GRANULAR,
            ),
            (
                key(ExposureType::NonRetail, Seniority::NonSenior, Granularity::Granular),
                NON_RETAIL_NON_SENIOR_GRANULAR,
            ),
            (
                key(ExposureType::NonRetail, Seniority::NonSenior, Granularity::NonGranular),
                NON_RETAIL_NON_SENIOR_NON_GRANULAR,
            ),
            (
                key(ExposureType::Retail, Seniority::Senior, Granularity::Granular),
                RETAIL_SENIOR,
            ),
            (
                key(ExposureType::Retail, Seniority::NonSenior, Granularity::Granular),
                RETAIL_NON_SENIOR,
            ),
        ]
    }
}

/// Result of a parameter calibration, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Classification key used for the lookup.
    pub key: ClassificationKey,
    /// Coefficients found in the table.
    pub coefficients: SupervisoryCoefficients,
    /// Linear combination before the floor.
    pub raw: f64,
    /// Calibrated parameter, `max(0.3, raw)`.
    pub p: f64,
}

impl Calibration {
    /// Returns true when the 0.3 floor determined `p`.
    pub fn floor_binding(&self) -> bool {
        self.raw < P_FLOOR
    }
}

/// Calibrates `p` for an explicit classification.
///
/// N, LGD and M are not range-checked: N must be non-zero, LGD is expected in
/// `[0, 1]` and M in `1..=5`. Callers validate at the boundary.
pub fn calibrate(
    classification: &Classification,
    effective_count: f64,
    lgd: f64,
    kirb: f64,
    maturity_years: u32,
) -> SecIrbaResult<Calibration> {
    let key = classification.key();
    let coefficients = SupervisoryParameterTable::lookup(key)?;
    let raw = coefficients.a
        + coefficients.b / effective_count
        + coefficients.c * kirb
        + coefficients.d * lgd
        + coefficients.e * f64::from(maturity_years);

    Ok(Calibration {
        key,
        coefficients,
        raw,
        p: raw.max(P_FLOOR),
    })
}

/// Calibrates `p`, deriving granularity from the exposure type and N.
///
/// # Example
///
/// ```rust
/// use secirba_core::{ExposureType, Seniority};
/// use secirba_formula::parameter::calibrate_p;
///
/// // Retail senior, N = 30, LGD = 45%, K_IRB = 10%, M = 3: floor binds.
/// let p = calibrate_p(ExposureType::Retail, Seniority::Senior, 30.0, 0.45, 0.10, 3).unwrap();
/// assert_eq!(p, 0.3);
/// ```
pub fn calibrate_p(
    exposure_type: ExposureType,
    seniority: Seniority,
    effective_count: f64,
    lgd: f64,
    kirb: f64,
    maturity_years: u32,
) -> SecIrbaResult<f64> {
    let classification = Classification::derive(exposure_type, seniority, effective_count);
    calibrate(&classification, effective_count, lgd, kirb, maturity_years).map(|c| c.p)
}

/// Pool statistics and classification needed to calibrate `p`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterInputs {
    /// Exposure type of the pool.
    pub exposure_type: ExposureType,
    /// Seniority of the tranche.
    pub seniority: Seniority,
    /// Effective number of exposures N.
    pub effective_count: f64,
    /// Exposure-weighted average LGD of the pool.
    pub lgd: f64,
    /// Tranche maturity M in years.
    pub maturity_years: u32,
}

impl ParameterInputs {
    /// Classification with granularity derived from N.
    pub fn classification(&self) -> Classification {
        Classification::derive(self.exposure_type, self.seniority, self.effective_count)
    }

    /// Calibrates `p` for the given K_IRB.
    pub fn calibrate(&self, kirb: f64) -> SecIrbaResult<Calibration> {
        self.calibrate_at(kirb, self.maturity_years)
    }

    /// Calibrates `p` for the given K_IRB at another maturity.
    pub fn calibrate_at(&self, kirb: f64, maturity_years: u32) -> SecIrbaResult<Calibration> {
        calibrate(
            &self.classification(),
            self.effective_count,
            self.lgd,
            kirb,
            maturity_years,
        )
    }
}
