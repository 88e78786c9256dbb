//! K_SSA sensitivity sweeps.
//!
//! Evaluates the supervisory formula over a linear grid of K_IRB values for
//! each tranche maturity. Grid points are independent; large grids are
//! evaluated with rayon when the `parallel` feature is enabled.

use log::trace;
use serde::{Deserialize, Serialize};

use secirba_core::{SecIrbaError, SecIrbaResult, TranchePoints};

use crate::parameter::{ParameterInputs, MATURITY_YEARS};
use crate::supervisory::compute_kssa_for_tranche;

/// Default p increment per year of maturity in [`ParameterMode::MaturityShift`].
pub const DEFAULT_MATURITY_STEP: f64 = 0.05;

/// How p is chosen at each grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterMode {
    /// `p(M) = base_p + step × M`.
    MaturityShift {
        /// Parameter at M = 0.
        base_p: f64,
        /// Increment per year of maturity.
        step: f64,
    },
    /// p calibrated from the coefficient table at each (K, M).
    ///
    /// The `maturity_years` of the inputs is replaced by the grid maturity.
    Calibrated(ParameterInputs),
}

impl ParameterMode {
    /// Maturity shift with the default step of 0.05 per year.
    #[must_use]
    pub fn maturity_shift(base_p: f64) -> Self {
        Self::MaturityShift {
            base_p,
            step: DEFAULT_MATURITY_STEP,
        }
    }

    /// Parameter for a grid point.
    pub fn parameter(&self, kirb: f64, maturity_years: u32) -> SecIrbaResult<f64> {
        match self {
            Self::MaturityShift { base_p, step } => Ok(base_p + step * f64::from(maturity_years)),
            Self::Calibrated(inputs) => inputs.calibrate_at(kirb, maturity_years).map(|c| c.p),
        }
    }
}

/// Grid of K_IRB values crossed with maturities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    /// Smallest K_IRB, must be positive.
    pub k_min: f64,
    /// Largest K_IRB.
    pub k_max: f64,
    /// Number of K_IRB points, at least 2.
    pub points: usize,
    /// Maturities in years.
    pub maturities: Vec<u32>,
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self {
            k_min: 0.01,
            k_max: 0.30,
            points: 200,
            maturities: MATURITY_YEARS.collect(),
        }
    }
}

impl SweepGrid {
    /// Creates a grid over all maturities 1..=5.
    #[must_use]
    pub fn new(k_min: f64, k_max: f64, points: usize) -> Self {
        Self {
            k_min,
            k_max,
            points,
            maturities: MATURITY_YEARS.collect(),
        }
    }

    /// Restricts the grid to the given maturities.
    #[must_use]
    pub fn with_maturities(mut self, maturities: Vec<u32>) -> Self {
        self.maturities = maturities;
        self
    }

    /// Checks the grid bounds.
    pub fn validate(&self) -> SecIrbaResult<()> {
        if self.points < 2 {
            return Err(SecIrbaError::invalid_input(format!(
                "sweep grid needs at least 2 points, got {}",
                self.points
            )));
        }
        if !(self.k_min > 0.0) || !self.k_max.is_finite() || self.k_max <= self.k_min {
            return Err(SecIrbaError::invalid_input(format!(
                "sweep grid requires 0 < k_min < k_max, got [{}, {}]",
                self.k_min, self.k_max
            )));
        }
        if self.maturities.is_empty() {
            return Err(SecIrbaError::invalid_input("sweep grid has no maturities"));
        }
        Ok(())
    }

    /// K_IRB values, evenly spaced from `k_min` to `k_max` inclusive.
    pub fn k_values(&self) -> Vec<f64> {
        let last = self.points.saturating_sub(1).max(1) as f64;
        let step = (self.k_max - self.k_min) / last;
        (0..self.points)
            .map(|i| {
                if i + 1 == self.points {
                    self.k_max
                } else {
                    self.k_min + step * i as f64
                }
            })
            .collect()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.points * self.maturities.len()
    }

    /// Returns true if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Execution options for sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Enable parallel evaluation (requires the `parallel` feature).
    pub parallel: bool,
    /// Minimum grid size to trigger parallel evaluation.
    pub parallel_threshold: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 1_000,
        }
    }
}

impl SweepOptions {
    /// Options that always evaluate sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the threshold for parallel evaluation.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel evaluation should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Tranche maturity in years.
    pub maturity_years: u32,
    /// Pool capital charge.
    pub kirb: f64,
    /// Supervisory parameter used.
    pub p: f64,
    /// Supervisory capital requirement.
    pub kssa: f64,
}

/// K_SSA curve for one maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityCurve {
    /// Tranche maturity in years.
    pub maturity_years: u32,
    /// Points in increasing K_IRB order.
    pub points: Vec<SweepPoint>,
}

/// Result of a sweep, one curve per maturity in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Tranche evaluated.
    pub tranche: TranchePoints,
    /// Curves by maturity.
    pub curves: Vec<MaturityCurve>,
}

impl SweepResult {
    /// All points, maturity-major.
    pub fn points(&self) -> impl Iterator<Item = &SweepPoint> {
        self.curves.iter().flat_map(|c| c.points.iter())
    }

    /// Curve for the given maturity.
    pub fn curve(&self, maturity_years: u32) -> Option<&MaturityCurve> {
        self.curves
            .iter()
            .find(|c| c.maturity_years == maturity_years)
    }
}

/// Sweeps K_SSA over the grid for a tranche.
///
/// # Example
///
/// ```rust
/// use secirba_core::TranchePoints;
/// use secirba_formula::sweep::{sweep, ParameterMode, SweepGrid, SweepOptions};
///
/// let tranche = TranchePoints::new(0.2, 0.8).unwrap();
/// let result = sweep(
///     &tranche,
///     &SweepGrid::default(),
///     &ParameterMode::maturity_shift(0.5),
///     &SweepOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(result.curves.len(), 5);
/// assert_eq!(result.curves[0].points.len(), 200);
/// ```
pub fn sweep(
    tranche: &TranchePoints,
    grid: &SweepGrid,
    mode: &ParameterMode,
    options: &SweepOptions,
) -> SecIrbaResult<SweepResult> {
    grid.validate()?;

    let k_values = grid.k_values();
    let cells: Vec<(u32, f64)> = grid
        .maturities
        .iter()
        .flat_map(|&m| k_values.iter().map(move |&k| (m, k)))
        .collect();

    let evaluated = map_cells(&cells, options, |&(maturity_years, kirb)| {
        let p = mode.parameter(kirb, maturity_years)?;
        let kssa = compute_kssa_for_tranche(kirb, tranche, p)?;
        Ok(SweepPoint {
            maturity_years,
            kirb,
            p,
            kssa,
        })
    });
    let points = evaluated.into_iter().collect::<SecIrbaResult<Vec<_>>>()?;

    let curves = points
        .chunks(grid.points)
        .zip(grid.maturities.iter())
        .map(|(chunk, &maturity_years)| MaturityCurve {
            maturity_years,
            points: chunk.to_vec(),
        })
        .collect();

    Ok(SweepResult {
        tranche: *tranche,
        curves,
    })
}

/// Maps over grid cells, in parallel when the options allow it.
#[allow(unused_variables)]
fn map_cells<T, U, F>(items: &[T], options: &SweepOptions, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if options.should_parallelize(items.len()) {
            trace!("sweeping {} grid points in parallel", items.len());
            return items.par_iter().map(f).collect();
        }
    }

    trace!("sweeping {} grid points sequentially", items.len());
    items.iter().map(f).collect()
}
