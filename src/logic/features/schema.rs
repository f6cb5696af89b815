//! Expected Feature Schema
//!
//! The ordered feature-name list the trained model requires at inference
//! time. Sourced from the loaded artifact, read-only afterwards. It defines
//! both the length and the column order of every vector handed to the model.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSchema {
    names: Vec<String>,
    hash: u32,
}

impl FeatureSchema {
    pub fn from_names(names: Vec<String>) -> Self {
        let hash = compute_schema_hash(&names);
        Self { names, hash }
    }

    /// Feature names in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// CRC32 over the ordered names. Used to detect order or content
    /// mismatches between a vector and the model downstream.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    /// Get feature index by name (O(n) but features are few)
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Compute CRC32 hash over the ordered feature names.
pub fn compute_schema_hash(names: &[String]) -> u32 {
    let mut hasher = Hasher::new();
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::from_names(vec![
            "tenure".to_string(),
            "MonthlyCharges".to_string(),
            "Contract_Monthtomonth".to_string(),
        ])
    }

    #[test]
    fn test_hash_consistency() {
        let names: Vec<String> = vec!["a".into(), "b".into()];
        assert_eq!(compute_schema_hash(&names), compute_schema_hash(&names));
    }

    #[test]
    fn test_hash_non_zero() {
        assert_ne!(schema().hash(), 0);
    }

    #[test]
    fn test_hash_depends_on_order() {
        let forward: Vec<String> = vec!["a".into(), "b".into()];
        let reversed: Vec<String> = vec!["b".into(), "a".into()];
        assert_ne!(compute_schema_hash(&forward), compute_schema_hash(&reversed));
    }

    #[test]
    fn test_index_of() {
        let schema = schema();
        assert_eq!(schema.index_of("tenure"), Some(0));
        assert_eq!(schema.index_of("Contract_Monthtomonth"), Some(2));
        assert_eq!(schema.index_of("nonexistent"), None);
    }

    #[test]
    fn test_len() {
        assert_eq!(schema().len(), 3);
    }
}
