//! Error handling
//!
//! Closed error taxonomy for the demo core, so callers can tell a fatal
//! model-load failure apart from a per-request prediction failure.

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Artifact missing, unreadable, or failed validation. Fatal; nothing
    /// can be predicted without a model.
    ModelLoadFailure(String),

    /// Encoded vector shape or order disagrees with the model schema.
    /// Fatal for that request only.
    SchemaMismatch {
        expected_len: usize,
        actual_len: usize,
        expected_hash: u32,
        actual_hash: u32,
    },

    /// Raw input outside its declared domain.
    InvalidInput(String),
}

impl AppError {
    /// Short checklist shown to the user next to the error message.
    pub fn remediation(&self) -> &'static [&'static str] {
        match self {
            AppError::ModelLoadFailure(_) => &[
                "Check the model file exists at the configured path",
                "Verify model file integrity (checksum sidecar)",
                "Re-export the artifact with feature names, coefficients and intercept",
            ],
            AppError::SchemaMismatch { .. } => &[
                "Check all inputs are valid",
                "Verify model file integrity",
                "Compare the encoder output with the training feature list",
            ],
            AppError::InvalidInput(_) => &[
                "Check all inputs are valid",
                "Stay inside the ranges shown by the form",
            ],
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ModelLoadFailure(msg) => write!(f, "Model loading failed: {}", msg),
            AppError::SchemaMismatch {
                expected_len,
                actual_len,
                expected_hash,
                actual_hash,
            } => write!(
                f,
                "Feature schema mismatch: expected {} features (hash {:08x}), got {} (hash {:08x})",
                expected_len, expected_hash, actual_len, actual_hash
            ),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
