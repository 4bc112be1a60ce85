pub mod bucket_values;
pub mod enums;
pub mod pricing_selections;
pub mod pricing_states;
pub mod volume_discounts;
