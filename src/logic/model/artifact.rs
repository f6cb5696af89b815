//! Churn Model Artifact
//!
//! Loads the externally trained logistic-regression artifact and exposes the
//! three accessors the engine needs: ordered feature names, one coefficient
//! per feature, scalar intercept. The artifact is opaque beyond that; it is
//! loaded once at startup and read-only for the rest of the process.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::integrity;
use crate::error::{AppError, AppResult};
use crate::logic::features::FeatureSchema;

/// On-disk artifact shape. Field names follow the exporter.
#[derive(Debug, Deserialize)]
struct ArtifactFile {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: String,
    pub feature_count: usize,
    pub checksum_verified: bool,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Validated, ready-to-score churn model.
#[derive(Debug, Clone)]
pub struct ChurnModel {
    schema: FeatureSchema,
    coefficients: Array1<f64>,
    intercept: f64,
    metadata: ModelMetadata,
}

impl ChurnModel {
    /// Load and validate the artifact at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        log::info!("Loading churn model from: {}", path.display());

        if !path.exists() {
            return Err(AppError::ModelLoadFailure(format!(
                "model not found: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).map_err(|e| {
            AppError::ModelLoadFailure(format!("cannot read {}: {}", path.display(), e))
        })?;

        let checksum_verified = integrity::verify_sidecar(path, &bytes)?;

        let raw: ArtifactFile = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::ModelLoadFailure(format!("malformed artifact: {}", e)))?;

        let mut model = Self::from_parts(raw.feature_names, raw.coefficients, raw.intercept)?;
        model.metadata.model_path = path.display().to_string();
        model.metadata.checksum_verified = checksum_verified;

        log::info!(
            "Churn model loaded ({} features, checksum {})",
            model.feature_count(),
            if checksum_verified { "verified" } else { "not checked" }
        );

        Ok(model)
    }

    /// Build a model from its three accessors. Used by `load` and by tests
    /// that need synthetic coefficients.
    pub fn from_parts(
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> AppResult<Self> {
        if feature_names.is_empty() {
            return Err(AppError::ModelLoadFailure(
                "artifact declares no features".to_string(),
            ));
        }
        if feature_names.len() != coefficients.len() {
            return Err(AppError::ModelLoadFailure(format!(
                "{} feature names but {} coefficients",
                feature_names.len(),
                coefficients.len()
            )));
        }
        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(AppError::ModelLoadFailure(
                "non-finite coefficient or intercept".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &feature_names {
            if !seen.insert(name.as_str()) {
                return Err(AppError::ModelLoadFailure(format!(
                    "duplicate feature name '{}'",
                    name
                )));
            }
        }

        let feature_count = feature_names.len();

        Ok(Self {
            schema: FeatureSchema::from_names(feature_names),
            coefficients: Array1::from_vec(coefficients),
            intercept,
            metadata: ModelMetadata {
                model_path: "<memory>".to_string(),
                model_type: "logistic_regression".to_string(),
                feature_count,
                checksum_verified: false,
                loaded_at: chrono::Utc::now(),
            },
        })
    }

    /// Ordered feature schema this model was trained on.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn feature_names(&self) -> &[String] {
        self.schema.names()
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn feature_count(&self) -> usize {
        self.schema.len()
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Top-n features ranked by |coefficient|, for the model summary.
    pub fn top_influences(&self, n: usize) -> Vec<(String, f64)> {
        let mut pairs: Vec<(String, f64)> = self
            .feature_names()
            .iter()
            .cloned()
            .zip(self.coefficients.iter().copied())
            .collect();

        pairs.sort_by(|a, b| {
            b.1.abs()
                .partial_cmp(&a.1.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pairs.truncate(n);
        pairs
    }
}
