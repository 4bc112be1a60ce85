pub mod static_catalog;

use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    entities::{buckets::BucketEntity, plans::PlanEntity},
    value_objects::{
        enums::{billing_cycles::BillingCycle, plan_ids::PlanId},
        volume_discounts::VolumeDiscountTier,
    },
};

/// Result of a platform fee lookup for one plan at one active-users tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeQuote {
    /// The plan does not charge a platform fee at all.
    NotCharged,
    /// Flat monthly fee in whole NOK.
    Amount(i64),
    /// No published fee for this tier; the plan is quote-only there.
    QuoteOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    pub currency: String,
    pub currency_symbol: String,
    pub yearly_discount_label: String,
    pub yearly_billing_note: String,
    pub monthly_billing_note: String,
    pub contact_sales_label: String,
}

/// Billing-cycle toggle metadata for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingOption {
    pub value: BillingCycle,
    pub label: String,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("bucket sequence for {0} is empty")]
    EmptyBuckets(&'static str),
    #[error("bucket sequence for {dimension} is not strictly ascending at {bucket_id}")]
    NonAscendingBuckets {
        dimension: &'static str,
        bucket_id: String,
    },
    #[error("bucket sequence for {0} must end with an unbounded bucket")]
    MissingUnboundedTail(&'static str),
    #[error("duplicate bucket id {0}")]
    DuplicateBucketId(String),
    #[error("no plans defined")]
    EmptyPlans,
    #[error("duplicate plan {0}")]
    DuplicatePlan(PlanId),
    #[error("volume discount tiers are not ascending in both threshold and percent")]
    NonAscendingDiscountTiers,
    #[error("fee table for {plan} references unknown active-users bucket {bucket_id}")]
    UnknownFeeBucket { plan: PlanId, bucket_id: String },
    #[error("fee table refers to plan {0} which is not in the catalog")]
    UnknownFeePlan(PlanId),
    #[error("creator base price must be positive")]
    NonPositiveBasePrice,
    #[error("yearly discount must be below 100 percent")]
    YearlyDiscountOutOfRange,
    #[error("catalog JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only access to all pricing knowledge. Data is validated by
/// construction and by tests; no accessor fails at runtime.
#[automock]
pub trait Catalog: Send + Sync {
    /// Plans in fixed display order.
    fn plans(&self) -> Vec<PlanEntity>;
    /// Course-creator buckets, ascending, unbounded tail last.
    fn creator_buckets(&self) -> Vec<BucketEntity>;
    /// Active-users buckets, ascending, unbounded tail last.
    fn active_users_buckets(&self) -> Vec<BucketEntity>;
    /// Monthly price per course creator before volume discounts, whole NOK.
    fn creator_base_price(&self) -> i64;
    fn volume_discounts(&self) -> Vec<VolumeDiscountTier>;
    /// Platform fee for one plan at one active-users tier.
    fn platform_fee(&self, plan_id: PlanId, users_bucket_id: &str) -> FeeQuote;
    fn yearly_discount_percent(&self) -> u8;
    fn display(&self) -> DisplayConfig;
    fn billing_options(&self) -> Vec<BillingOption>;
}
