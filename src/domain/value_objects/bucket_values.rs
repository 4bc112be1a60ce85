use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Numeric value of a slider bucket. The last bucket of each dimension is
/// `Unbounded` ("50+" creators, "10,000+" users) and can never be priced
/// directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BucketValue {
    Bounded(u32),
    Unbounded,
}

impl BucketValue {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, BucketValue::Unbounded)
    }

    pub fn bounded(&self) -> Option<u32> {
        match self {
            BucketValue::Bounded(count) => Some(*count),
            BucketValue::Unbounded => None,
        }
    }
}

impl Ord for BucketValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BucketValue::Bounded(a), BucketValue::Bounded(b)) => a.cmp(b),
            (BucketValue::Bounded(_), BucketValue::Unbounded) => Ordering::Less,
            (BucketValue::Unbounded, BucketValue::Bounded(_)) => Ordering::Greater,
            (BucketValue::Unbounded, BucketValue::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for BucketValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
