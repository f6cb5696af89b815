//! Logic Module - Business Logic & Engines
//!
//! - `model/` - trained churn artifact (load, validate, integrity)
//! - `features/` - raw input encoding into the model's feature space
//! - `risk/` - probability, risk tier, recommendations

pub mod features;
pub mod model;
pub mod risk;
