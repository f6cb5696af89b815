//! Canned Guidance & Feature Impacts
//!
//! Static recommendation texts per risk tier, and the per-feature
//! contribution breakdown shown in the analysis view.

use super::types::{FeatureImpact, RiskTier};
use crate::logic::features::FeatureVector;
use crate::logic::model::ChurnModel;

/// Impacts surfaced in the analysis view
pub const MAX_IMPACTS: usize = 10;

pub fn headline(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "🔴 HIGH RISK: Immediate action required!",
        RiskTier::Medium => "🟡 MEDIUM RISK: Monitor closely",
        RiskTier::Low => "🟢 LOW RISK: Healthy customer",
    }
}

pub fn actions_label(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "Recommended actions:",
        RiskTier::Medium => "Suggested actions:",
        RiskTier::Low => "Maintenance suggestions:",
    }
}

/// Fixed action list per tier. Static text, not computed.
pub fn recommendations(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::High => &[
            "Personal retention call",
            "20% discount offer",
            "Priority support",
        ],
        RiskTier::Medium => &["Satisfaction survey", "Loyalty program offer"],
        RiskTier::Low => &["Regular check-ins", "Upsell opportunities"],
    }
}

/// Per-feature contribution to the linear score, largest magnitude first,
/// capped at MAX_IMPACTS.
pub fn impacts(vector: &FeatureVector, model: &ChurnModel) -> Vec<FeatureImpact> {
    let mut impacts: Vec<FeatureImpact> = model
        .feature_names()
        .iter()
        .zip(vector.values())
        .zip(model.coefficients())
        .map(|((name, &value), &coefficient)| FeatureImpact {
            name: name.clone(),
            value,
            coefficient,
            impact: value * coefficient,
        })
        .collect();

    impacts.sort_by(|a, b| {
        b.impact
            .abs()
            .partial_cmp(&a.impact.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    impacts.truncate(MAX_IMPACTS);
    impacts
}
