use std::sync::Arc;

use tracing::{debug, warn};
use url::form_urlencoded;

use crate::catalog::{Catalog, DisplayConfig, FeeQuote};
use crate::domain::{
    entities::{buckets::BucketEntity, plans::PlanEntity},
    value_objects::{
        bucket_values::BucketValue,
        enums::{billing_cycles::BillingCycle, plan_ids::PlanId},
        pricing_selections::{PlanViewModel, PricingSelection, SelectedBucket},
        pricing_states::PricingState,
        volume_discounts::VolumeTierInfo,
    },
};
use crate::usecases::volume_discounts;

/// Fixed origin tag appended to every CTA link. Downstream signup and
/// contact flows key on it, so it is part of the external contract.
const CTA_SOURCE_TAG: &str = "pricing-page";

const ENTERPRISE_INCLUDED_LABEL: &str = "Custom scope";

/// Resolves a `PricingState` into render-ready plan cards. Stateless and
/// pure: equal states always produce equal selections, so the presentation
/// layer simply recomputes after every input event.
pub struct PricingResolver<C>
where
    C: Catalog + 'static,
{
    catalog: Arc<C>,
}

impl<C> PricingResolver<C>
where
    C: Catalog + 'static,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Starting selection for first render: yearly billing, 2 creators,
    /// 250 active users.
    pub fn default_state(&self) -> PricingState {
        PricingState {
            billing_cycle: BillingCycle::Yearly,
            creators_bucket_index: 1,
            active_users_bucket_index: 2,
        }
    }

    pub fn is_valid_creators_index(&self, index: i64) -> bool {
        index >= 0 && (index as usize) < self.catalog.creator_buckets().len()
    }

    pub fn is_valid_active_users_index(&self, index: i64) -> bool {
        index >= 0 && (index as usize) < self.catalog.active_users_buckets().len()
    }

    pub fn clamp_creators_index(&self, index: i64) -> usize {
        clamp_index(index, self.catalog.creator_buckets().len())
    }

    pub fn clamp_active_users_index(&self, index: i64) -> usize {
        clamp_index(index, self.catalog.active_users_buckets().len())
    }

    /// Tier membership for display chips; pricing goes through the same
    /// tier table and helper, so the two can never disagree.
    pub fn volume_tier_info(&self, creator_count: u32) -> VolumeTierInfo {
        volume_discounts::tier_info(&self.catalog.volume_discounts(), creator_count)
    }

    pub fn compute_pricing_selection(&self, state: &PricingState) -> PricingSelection {
        let creator_buckets = self.catalog.creator_buckets();
        let users_buckets = self.catalog.active_users_buckets();

        // Out-of-range indices degrade to the first bucket; callers are
        // expected to clamp, the engine just has to stay total.
        let creator_bucket = select_bucket(&creator_buckets, state.creators_bucket_index);
        let users_bucket = select_bucket(&users_buckets, state.active_users_bucket_index);

        let (Some(creator_bucket), Some(users_bucket)) = (creator_bucket, users_bucket) else {
            warn!("pricing_resolver: catalog bucket sequence is empty, returning no plans");
            let missing = SelectedBucket {
                id: String::new(),
                label: String::new(),
                value: BucketValue::Bounded(0),
            };
            return PricingSelection {
                plans: Vec::new(),
                selected_creators_bucket: missing.clone(),
                selected_active_users_bucket: missing,
                state: *state,
            };
        };

        debug!(
            billing = %state.billing_cycle,
            creators = %creator_bucket.id,
            users = %users_bucket.id,
            "pricing_resolver: computing selection"
        );

        let display = self.catalog.display();
        let plans = self
            .catalog
            .plans()
            .iter()
            .map(|plan| self.plan_view_model(plan, creator_bucket, users_bucket, state, &display))
            .collect();

        PricingSelection {
            plans,
            selected_creators_bucket: SelectedBucket::from(creator_bucket),
            selected_active_users_bucket: SelectedBucket::from(users_bucket),
            state: *state,
        }
    }

    fn plan_view_model(
        &self,
        plan: &PlanEntity,
        creators: &BucketEntity,
        users: &BucketEntity,
        state: &PricingState,
        display: &DisplayConfig,
    ) -> PlanViewModel {
        let raw_price = self.raw_price(plan, creators, users, state.billing_cycle);
        let is_contact_sales = raw_price.is_none();

        let (display_price, price_note) = match raw_price {
            None => (display.contact_sales_label.clone(), String::new()),
            Some(price) => {
                let note = match state.billing_cycle {
                    BillingCycle::Monthly => display.monthly_billing_note.clone(),
                    BillingCycle::Yearly => format!("/ month, {}", display.yearly_billing_note),
                };
                (format_price(price, &display.currency_symbol), note)
            }
        };

        PlanViewModel {
            id: plan.id,
            title: plan.title.clone(),
            subtitle: plan.subtitle.clone(),
            display_price,
            price_note,
            included_label: included_label(plan, creators, users),
            cta_label: plan.cta_label.clone(),
            cta_href: build_cta_href(&plan.cta_base_url, state.billing_cycle, creators, users),
            features: plan.features.clone(),
            is_highlighted: plan.is_highlighted,
            is_contact_sales,
            raw_price,
            includes_lms: plan.includes_lms,
        }
    }

    /// Monthly-equivalent price in whole NOK, `None` when the combination is
    /// quote-only.
    fn raw_price(
        &self,
        plan: &PlanEntity,
        creators: &BucketEntity,
        users: &BucketEntity,
        billing: BillingCycle,
    ) -> Option<i64> {
        // Enterprise is quote-only by rule, not by arithmetic.
        if plan.id == PlanId::Enterprise {
            return None;
        }

        // Creator cost only applies to creator-billed plans; the unbounded
        // creator tier cannot be priced per creator.
        let creator_cost = if plan.includes_creator {
            let count = creators.value.bounded()?;
            Some(self.creator_cost(count))
        } else {
            None
        };

        let platform_fee = match self.catalog.platform_fee(plan.id, &users.id) {
            FeeQuote::NotCharged => None,
            FeeQuote::Amount(amount) => Some(amount),
            FeeQuote::QuoteOnly => return None,
        };

        // A plan with neither a creator component nor a fee has no price.
        if creator_cost.is_none() && platform_fee.is_none() {
            return None;
        }
        let monthly = creator_cost.unwrap_or(0) + platform_fee.unwrap_or(0);

        Some(match billing {
            BillingCycle::Monthly => monthly,
            BillingCycle::Yearly => {
                apply_percent_discount(monthly, self.catalog.yearly_discount_percent())
            }
        })
    }

    fn creator_cost(&self, creator_count: u32) -> i64 {
        let discount = volume_discounts::applicable_discount_percent(
            &self.catalog.volume_discounts(),
            creator_count,
        );
        let per_creator =
            self.catalog.creator_base_price() as f64 * (1.0 - f64::from(discount) / 100.0);
        (f64::from(creator_count) * per_creator).round() as i64
    }
}

fn clamp_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.clamp(0, (len - 1) as i64) as usize
}

fn select_bucket(buckets: &[BucketEntity], index: usize) -> Option<&BucketEntity> {
    buckets.get(index).or_else(|| buckets.first())
}

fn apply_percent_discount(amount: i64, percent: u8) -> i64 {
    (amount as f64 * (1.0 - f64::from(percent) / 100.0)).round() as i64
}

fn included_label(plan: &PlanEntity, creators: &BucketEntity, users: &BucketEntity) -> String {
    if plan.id == PlanId::Enterprise {
        return ENTERPRISE_INCLUDED_LABEL.to_string();
    }

    // Platform-only plans never mention creators.
    if !plan.includes_creator {
        return format!("{} active users", users.label);
    }

    let creators_phrase = match creators.value {
        BucketValue::Bounded(1) => "1 course creator".to_string(),
        BucketValue::Bounded(count) => format!("{count} course creators"),
        BucketValue::Unbounded => format!("{} course creators", creators.label),
    };

    if !plan.includes_lms {
        return creators_phrase;
    }

    format!("{creators_phrase} + {} active users", users.label)
}

fn build_cta_href(
    base_url: &str,
    billing: BillingCycle,
    creators: &BucketEntity,
    users: &BucketEntity,
) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("billing", billing.as_str())
        .append_pair("creators", &creators.id)
        .append_pair("users", &users.id)
        .append_pair("source", CTA_SOURCE_TAG)
        .finish();

    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{query}")
}

fn format_price(amount: i64, currency_symbol: &str) -> String {
    format!("{currency_symbol} {}", group_thousands(amount))
}

/// Norwegian-style grouping: a space between thousand groups.
fn group_thousands(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let bytes = digits.as_bytes();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (position, digit) in bytes.iter().enumerate() {
        if position > 0 && (bytes.len() - position) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*digit as char);
    }
    grouped
}
