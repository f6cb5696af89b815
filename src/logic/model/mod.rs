//! Model Module - trained churn artifact
//!
//! Loading, shape validation and integrity checks. The artifact exposes
//! exactly three read-only accessors: ordered feature names, one coefficient
//! per feature, and a scalar intercept. Nothing here mutates the model.

pub mod artifact;
pub mod integrity;

pub use artifact::{ChurnModel, ModelMetadata};
