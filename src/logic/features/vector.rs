//! Feature Vector - the numeric row handed to the model
//!
//! Values are stored in schema order and stamped with the schema hash, so a
//! reordered or truncated vector is detectable before it reaches the model.

use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    schema_hash: u32,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Zeroed vector aligned to the schema. Every feature the encoder does
    /// not touch keeps this 0.0 default.
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            schema_hash: schema.hash(),
            values: vec![0.0; schema.len()],
        }
    }

    pub fn schema_hash(&self) -> u32 {
        self.schema_hash
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Values in schema order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get feature by name
    #[allow(dead_code)]
    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f64> {
        schema.index_of(name).and_then(|i| self.values.get(i).copied())
    }

    /// Set feature by name. Returns false when the schema does not know the
    /// name; the caller decides whether that is worth a warning.
    pub fn set_by_name(&mut self, schema: &FeatureSchema, name: &str, value: f64) -> bool {
        match schema.index_of(name) {
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => false,
        }
    }

    /// Length and hash agree with the schema.
    pub fn matches(&self, schema: &FeatureSchema) -> bool {
        self.values.len() == schema.len() && self.schema_hash == schema.hash()
    }

    /// JSON-serializable form for logging and inspection.
    pub fn to_log_entry(&self, schema: &FeatureSchema) -> serde_json::Value {
        serde_json::json!({
            "schema_hash": self.schema_hash,
            "values": self.values,
            "named_values": schema.names().iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.clone(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::from_names(vec!["a".to_string(), "b".to_string()])
    }

    #[test]
    fn test_zeroed_matches_schema() {
        let schema = schema();
        let vector = FeatureVector::zeroed(&schema);

        assert_eq!(vector.len(), 2);
        assert_eq!(vector.schema_hash(), schema.hash());
        assert!(vector.matches(&schema));
        assert!(vector.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_by_name() {
        let schema = schema();
        let mut vector = FeatureVector::zeroed(&schema);

        assert!(vector.set_by_name(&schema, "b", 42.0));
        assert_eq!(vector.get_by_name(&schema, "b"), Some(42.0));
        assert_eq!(vector.get_by_name(&schema, "a"), Some(0.0));

        assert!(!vector.set_by_name(&schema, "nonexistent", 1.0));
    }

    #[test]
    fn test_matches_rejects_other_schema() {
        let schema = schema();
        let other = FeatureSchema::from_names(vec!["b".to_string(), "a".to_string()]);

        let vector = FeatureVector::zeroed(&schema);
        assert!(!vector.matches(&other));
    }

    #[test]
    fn test_to_log_entry() {
        let schema = schema();
        let mut vector = FeatureVector::zeroed(&schema);
        vector.set_by_name(&schema, "a", 0.5);

        let entry = vector.to_log_entry(&schema);
        assert_eq!(entry["named_values"]["a"], 0.5);
        assert!(entry["schema_hash"].as_u64().is_some());
    }
}
