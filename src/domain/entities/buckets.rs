use serde::{Deserialize, Serialize};

use crate::domain::value_objects::bucket_values::BucketValue;

/// One discrete selectable point along a slider dimension. Bucket sequences
/// are strictly ascending by value and always end with an unbounded bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketEntity {
    pub id: String,
    pub label: String,
    pub value: BucketValue,
}

impl BucketEntity {
    pub fn bounded(id: &str, label: &str, value: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: BucketValue::Bounded(value),
        }
    }

    pub fn unbounded(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: BucketValue::Unbounded,
        }
    }
}
