//! Tranche regime and risk weight result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the tranche relative to the pool capital charge K_IRB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrancheRegime {
    /// Regime 1: K_IRB <= A. The tranche attaches at or above the capital charge.
    AboveCapital,
    /// Regime 2: A < K_IRB < D. The tranche straddles the capital charge.
    Straddling,
    /// Regime 3: K_IRB >= D. The tranche lies entirely within the capital charge.
    WithinCapital,
}

impl TrancheRegime {
    /// Returns the regime number (1, 2 or 3).
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            TrancheRegime::AboveCapital => 1,
            TrancheRegime::Straddling => 2,
            TrancheRegime::WithinCapital => 3,
        }
    }
}

impl fmt::Display for TrancheRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrancheRegime::AboveCapital => "above capital",
            TrancheRegime::Straddling => "straddling",
            TrancheRegime::WithinCapital => "within capital",
        };
        write!(f, "{} ({name})", self.number())
    }
}

/// Output of the tranche classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskWeightResult {
    /// Tranche regime.
    pub regime: TrancheRegime,
    /// Risk weight after the regulatory floor.
    pub risk_weight_percent: f64,
    /// Risk weight before the floor was applied.
    pub unfloored_risk_weight: f64,
}

impl RiskWeightResult {
    /// Risk-weighted amount for an exposure of the given size.
    #[must_use]
    pub fn risk_weighted_amount(&self, exposure: f64) -> f64 {
        self.risk_weight_percent * exposure / 100.0
    }

    /// Returns true when the regulatory floor determined the risk weight.
    #[must_use]
    pub fn floor_binding(&self) -> bool {
        self.unfloored_risk_weight < self.risk_weight_percent
    }
}
