use crate::domain::value_objects::enums::billing_cycles::BillingCycle;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_selection: DefaultSelection,
}

/// Starting toggle/slider positions for first render, overridable from env.
/// Indices are clamped against the catalog before use.
#[derive(Debug, Clone)]
pub struct DefaultSelection {
    pub billing_cycle: BillingCycle,
    pub creators_bucket_index: usize,
    pub active_users_bucket_index: usize,
}
