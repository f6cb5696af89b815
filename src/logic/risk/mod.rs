//! Risk Module - probability, tier and guidance
//!
//! - `classifier` - the predict logic (linear score, sigmoid, clamp, tier)
//! - `rules` - thresholds, no logic
//! - `types` - data structures, no logic
//! - `recommend` - canned per-tier guidance and feature impacts

pub mod classifier;
pub mod recommend;
pub mod rules;
pub mod types;

pub use types::{PredictionResult, RiskTier};
