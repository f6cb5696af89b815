//! Risk Classifier
//!
//! Only the predict logic: linear decision function, sigmoid,
//! display clamp, tier mapping. The model is an explicit argument, never
//! global state.

use ndarray::aview1;

use super::rules::RiskThresholds;
use super::types::{PredictionResult, RiskTier};
use crate::error::{AppError, AppResult};
use crate::logic::features::FeatureVector;
use crate::logic::model::ChurnModel;

/// Score an encoded vector against the model with default thresholds.
pub fn predict(vector: &FeatureVector, model: &ChurnModel) -> AppResult<PredictionResult> {
    predict_with_thresholds(vector, model, &RiskThresholds::default())
}

/// Prediction with custom thresholds
pub fn predict_with_thresholds(
    vector: &FeatureVector,
    model: &ChurnModel,
    thresholds: &RiskThresholds,
) -> AppResult<PredictionResult> {
    let schema = model.schema();
    if !vector.matches(schema) {
        return Err(AppError::SchemaMismatch {
            expected_len: schema.len(),
            actual_len: vector.len(),
            expected_hash: schema.hash(),
            actual_hash: vector.schema_hash(),
        });
    }

    let linear_score = model.coefficients().dot(&aview1(vector.values())) + model.intercept();
    let raw_probability = sigmoid(linear_score);
    let probability = raw_probability.clamp(thresholds.floor, thresholds.ceiling);
    let tier = classify_probability(probability, thresholds);

    Ok(PredictionResult {
        probability,
        raw_probability,
        linear_score,
        tier,
    })
}

/// Map a clamped probability onto a tier. Boundaries are half-open:
/// exactly `high_min` stays MEDIUM, exactly `medium_min` stays LOW.
pub fn classify_probability(probability: f64, thresholds: &RiskThresholds) -> RiskTier {
    if probability > thresholds.high_min {
        RiskTier::High
    } else if probability > thresholds.medium_min {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================================================
// TESTS
// ============================================================================
