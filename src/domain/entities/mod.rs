pub mod buckets;
pub mod plans;
