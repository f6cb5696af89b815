//! Risk Types
//!
//! Data structures only - no classify logic.

use serde::{Deserialize, Serialize};

/// Discrete churn-risk tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Healthy customer, maintenance only
    Low,
    /// Worth monitoring
    Medium,
    /// Immediate action required
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one prediction. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Display probability, clamped to the trust bounds
    pub probability: f64,
    /// Sigmoid output before clamping
    pub raw_probability: f64,
    /// Linear decision function w·x + b
    pub linear_score: f64,
    pub tier: RiskTier,
}

/// One feature's contribution to the linear score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureImpact {
    pub name: String,
    pub value: f64,
    pub coefficient: f64,
    /// value × coefficient
    pub impact: f64,
}
