//! Risk Tier Rules & Thresholds
//!
//! Thresholds for tier mapping and probability display bounds.
//! No classify logic here - constants and config only.

use serde::{Deserialize, Serialize};

/// Strictly above this probability = HIGH
pub const HIGH_RISK_THRESHOLD: f64 = 0.6;

/// Strictly above this probability = MEDIUM (below the HIGH cut)
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.3;

/// Displayed probabilities never reach absolute certainty in either
/// direction. This is a trust decision, not numerical hygiene.
pub const PROBABILITY_FLOOR: f64 = 0.01;
pub const PROBABILITY_CEILING: f64 = 0.99;

/// Thresholds for tier mapping (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Strictly above this = HIGH
    pub high_min: f64,
    /// Strictly above this = MEDIUM
    pub medium_min: f64,
    /// Probability display floor
    pub floor: f64,
    /// Probability display ceiling
    pub ceiling: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_min: HIGH_RISK_THRESHOLD,
            medium_min: MEDIUM_RISK_THRESHOLD,
            floor: PROBABILITY_FLOOR,
            ceiling: PROBABILITY_CEILING,
        }
    }
}
