//! Central Configuration Constants
//!
//! Single source of truth for the encoding constants and input domains.
//! The shipped model was trained against these exact encoding values;
//! changing any of them invalidates the artifact.

/// App name
pub const APP_NAME: &str = "Customer Churn Predictor";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default model artifact location
pub const DEFAULT_MODEL_PATH: &str = "models/churn_model.json";

// ============================================
// Input domains
// ============================================

pub const TENURE_MIN: u32 = 1;
pub const TENURE_MAX: u32 = 72;
pub const MONTHLY_CHARGES_MIN: f64 = 0.0;
pub const MONTHLY_CHARGES_MAX: f64 = 200.0;

// Form defaults
pub const DEFAULT_TENURE: u32 = 12;
pub const DEFAULT_MONTHLY_CHARGES: f64 = 50.0;

// ============================================
// Soft encodings
// ============================================

/// "Yes" on a pseudo-binary feature
pub const SOFT_YES: f64 = 0.7;

/// "No" on a pseudo-binary feature
pub const SOFT_NO: f64 = 0.3;

/// PhoneService has no form control; it is fed a neutral midpoint
pub const PHONE_SERVICE_NEUTRAL: f64 = 0.5;

/// Activation for the selected one-hot level
pub const ONE_HOT_ACTIVE: f64 = 0.9;

/// MultipleLines_No / OnlineSecurity_No majority-class defaults
pub const ASSUMED_NO_WEIGHT: f64 = 0.7;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("CHURN_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
