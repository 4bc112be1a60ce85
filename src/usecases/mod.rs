pub mod pricing_resolver;
pub mod volume_discounts;
