pub mod billing_cycles;
pub mod plan_ids;
