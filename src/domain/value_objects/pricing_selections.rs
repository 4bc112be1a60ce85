use serde::Serialize;

use crate::domain::{
    entities::buckets::BucketEntity,
    value_objects::{
        bucket_values::BucketValue, enums::plan_ids::PlanId, pricing_states::PricingState,
    },
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectedBucket {
    pub id: String,
    pub label: String,
    pub value: BucketValue,
}

impl From<&BucketEntity> for SelectedBucket {
    fn from(bucket: &BucketEntity) -> Self {
        Self {
            id: bucket.id.clone(),
            label: bucket.label.clone(),
            value: bucket.value,
        }
    }
}

/// Render-ready card for one plan. `raw_price` is `None` exactly when
/// `is_contact_sales` is true.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanViewModel {
    pub id: PlanId,
    pub title: String,
    pub subtitle: String,
    pub display_price: String,
    pub price_note: String,
    pub included_label: String,
    pub cta_label: String,
    pub cta_href: String,
    pub features: Vec<String>,
    pub is_highlighted: bool,
    pub is_contact_sales: bool,
    pub raw_price: Option<i64>,
    pub includes_lms: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricingSelection {
    pub plans: Vec<PlanViewModel>,
    pub selected_creators_bucket: SelectedBucket,
    pub selected_active_users_bucket: SelectedBucket,
    pub state: PricingState,
}
