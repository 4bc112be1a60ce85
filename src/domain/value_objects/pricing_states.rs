use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::billing_cycles::BillingCycle;

/// The entire mutable state of the calculator. Indices select buckets from
/// the catalog's ordered sequences; callers clamp them before constructing a
/// state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingState {
    pub billing_cycle: BillingCycle,
    pub creators_bucket_index: usize,
    pub active_users_bucket_index: usize,
}
