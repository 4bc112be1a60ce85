use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{BillingOption, Catalog, CatalogError, DisplayConfig, FeeQuote};
use crate::domain::{
    entities::{buckets::BucketEntity, plans::PlanEntity},
    value_objects::{
        enums::{billing_cycles::BillingCycle, plan_ids::PlanId},
        volume_discounts::VolumeDiscountTier,
    },
};

/// The built-in MentorKit catalog. All pricing knowledge lives here as data;
/// price changes never touch engine code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardCatalog {
    plans: Vec<PlanEntity>,
    creator_buckets: Vec<BucketEntity>,
    active_users_buckets: Vec<BucketEntity>,
    creator_base_price: i64,
    volume_discounts: Vec<VolumeDiscountTier>,
    platform_fees: HashMap<PlanId, HashMap<String, Option<i64>>>,
    yearly_discount_percent: u8,
    display: DisplayConfig,
    billing_options: Vec<BillingOption>,
}

impl StandardCatalog {
    pub fn new() -> Self {
        Self {
            plans: standard_plans(),
            creator_buckets: vec![
                BucketEntity::bounded("creators_1", "1", 1),
                BucketEntity::bounded("creators_2", "2", 2),
                BucketEntity::bounded("creators_3", "3", 3),
                BucketEntity::bounded("creators_5", "5", 5),
                BucketEntity::bounded("creators_10", "10", 10),
                BucketEntity::bounded("creators_20", "20", 20),
                BucketEntity::unbounded("creators_50_plus", "50+"),
            ],
            active_users_buckets: vec![
                BucketEntity::bounded("users_50", "50", 50),
                BucketEntity::bounded("users_100", "100", 100),
                BucketEntity::bounded("users_250", "250", 250),
                BucketEntity::bounded("users_500", "500", 500),
                BucketEntity::bounded("users_1000", "1,000", 1000),
                BucketEntity::bounded("users_2500", "2,500", 2500),
                BucketEntity::bounded("users_5000", "5,000", 5000),
                BucketEntity::unbounded("users_10000_plus", "10,000+"),
            ],
            creator_base_price: 1390,
            volume_discounts: vec![
                VolumeDiscountTier { min_creators: 3, discount_percent: 10 },
                VolumeDiscountTier { min_creators: 5, discount_percent: 20 },
                VolumeDiscountTier { min_creators: 10, discount_percent: 30 },
                VolumeDiscountTier { min_creators: 20, discount_percent: 40 },
            ],
            platform_fees: standard_platform_fees(),
            yearly_discount_percent: 17,
            display: DisplayConfig {
                currency: "NOK".to_string(),
                currency_symbol: "kr".to_string(),
                yearly_discount_label: "Save ~17%".to_string(),
                yearly_billing_note: "billed annually".to_string(),
                monthly_billing_note: "per month".to_string(),
                contact_sales_label: "Contact sales".to_string(),
            },
            billing_options: vec![
                BillingOption {
                    value: BillingCycle::Monthly,
                    label: "Monthly".to_string(),
                    badge: None,
                },
                BillingOption {
                    value: BillingCycle::Yearly,
                    label: "Yearly".to_string(),
                    badge: Some("Save ~17%".to_string()),
                },
            ],
        }
    }

    /// Loads an alternative catalog from JSON and validates it.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_buckets("creators", &self.creator_buckets)?;
        validate_buckets("active_users", &self.active_users_buckets)?;

        if self.plans.is_empty() {
            return Err(CatalogError::EmptyPlans);
        }
        let mut plan_ids = HashSet::new();
        for plan in &self.plans {
            if !plan_ids.insert(plan.id) {
                return Err(CatalogError::DuplicatePlan(plan.id));
            }
        }

        for pair in self.volume_discounts.windows(2) {
            if pair[1].min_creators <= pair[0].min_creators
                || pair[1].discount_percent <= pair[0].discount_percent
            {
                return Err(CatalogError::NonAscendingDiscountTiers);
            }
        }

        let known_user_buckets: HashSet<&str> = self
            .active_users_buckets
            .iter()
            .map(|bucket| bucket.id.as_str())
            .collect();
        for (plan_id, table) in &self.platform_fees {
            if !plan_ids.contains(plan_id) {
                return Err(CatalogError::UnknownFeePlan(*plan_id));
            }
            for bucket_id in table.keys() {
                if !known_user_buckets.contains(bucket_id.as_str()) {
                    return Err(CatalogError::UnknownFeeBucket {
                        plan: *plan_id,
                        bucket_id: bucket_id.clone(),
                    });
                }
            }
        }

        if self.creator_base_price <= 0 {
            return Err(CatalogError::NonPositiveBasePrice);
        }
        if self.yearly_discount_percent >= 100 {
            return Err(CatalogError::YearlyDiscountOutOfRange);
        }

        Ok(())
    }
}

impl Default for StandardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StandardCatalog {
    fn plans(&self) -> Vec<PlanEntity> {
        self.plans.clone()
    }

    fn creator_buckets(&self) -> Vec<BucketEntity> {
        self.creator_buckets.clone()
    }

    fn active_users_buckets(&self) -> Vec<BucketEntity> {
        self.active_users_buckets.clone()
    }

    fn creator_base_price(&self) -> i64 {
        self.creator_base_price
    }

    fn volume_discounts(&self) -> Vec<VolumeDiscountTier> {
        self.volume_discounts.clone()
    }

    fn platform_fee(&self, plan_id: PlanId, users_bucket_id: &str) -> FeeQuote {
        match self.platform_fees.get(&plan_id) {
            None => FeeQuote::NotCharged,
            Some(table) => match table.get(users_bucket_id) {
                Some(Some(amount)) => FeeQuote::Amount(*amount),
                // Absent and explicit null both mean quote-only for the tier.
                Some(None) | None => FeeQuote::QuoteOnly,
            },
        }
    }

    fn yearly_discount_percent(&self) -> u8 {
        self.yearly_discount_percent
    }

    fn display(&self) -> DisplayConfig {
        self.display.clone()
    }

    fn billing_options(&self) -> Vec<BillingOption> {
        self.billing_options.clone()
    }
}

fn standard_plans() -> Vec<PlanEntity> {
    vec![
        PlanEntity {
            id: PlanId::Author,
            title: "Author".to_string(),
            subtitle: "For teams that only need to create courses".to_string(),
            is_highlighted: false,
            cta_label: "Get started".to_string(),
            cta_base_url: "/signup?plan=author".to_string(),
            features: vec![
                "Full MentorKit Course Creator".to_string(),
                "Supports multiple course creators".to_string(),
                "SCORM and xAPI export".to_string(),
                "No LMS or course delivery included".to_string(),
            ],
            includes_lms: false,
            includes_creator: true,
            helper_text: None,
            case_studies: None,
            pricing_examples: Vec::new(),
        },
        PlanEntity {
            id: PlanId::CoreClassic,
            title: "Core Classic".to_string(),
            subtitle: "For organisations that need LMS only".to_string(),
            is_highlighted: false,
            cta_label: "Start free trial".to_string(),
            cta_base_url: "/signup?plan=core_classic".to_string(),
            features: vec![
                "LMS Classic for course delivery".to_string(),
                "User tracking and basic reporting".to_string(),
                "Import SCORM/xAPI courses".to_string(),
                "Email support".to_string(),
            ],
            includes_lms: true,
            includes_creator: false,
            helper_text: None,
            case_studies: None,
            pricing_examples: Vec::new(),
        },
        PlanEntity {
            id: PlanId::SuiteClassic,
            title: "Suite Classic".to_string(),
            subtitle: "For organisations that want a simple, complete learning setup".to_string(),
            is_highlighted: false,
            cta_label: "Start free trial".to_string(),
            cta_base_url: "/signup?plan=suite_classic".to_string(),
            features: vec![
                "Course Creator included".to_string(),
                "LMS Classic for course delivery".to_string(),
                "User tracking and basic reporting".to_string(),
                "Email support".to_string(),
            ],
            includes_lms: true,
            includes_creator: true,
            helper_text: None,
            case_studies: None,
            pricing_examples: Vec::new(),
        },
        PlanEntity {
            id: PlanId::SuitePro,
            title: "Suite Pro".to_string(),
            subtitle: "For organisations that need scale, automation and integrations".to_string(),
            is_highlighted: true,
            cta_label: "Start free trial".to_string(),
            cta_base_url: "/signup?plan=suite_pro".to_string(),
            features: vec![
                "Course Creator included".to_string(),
                "LMS Pro with advanced automation".to_string(),
                "APIs and integration options".to_string(),
                "Single Sign-On (SSO)".to_string(),
                "Add-ons available as needed".to_string(),
            ],
            includes_lms: true,
            includes_creator: true,
            helper_text: None,
            case_studies: None,
            pricing_examples: Vec::new(),
        },
        PlanEntity {
            id: PlanId::Enterprise,
            title: "Enterprise".to_string(),
            subtitle: "Store organisasjoner / komplekse krav / integrasjoner / SLA".to_string(),
            is_highlighted: false,
            cta_label: "Contact sales".to_string(),
            cta_base_url: "/contact?plan=enterprise".to_string(),
            features: vec![
                "HR-system integration".to_string(),
                "Microsoft Teams integration".to_string(),
                "Calendar/email integration".to_string(),
                "Custom SLA / security".to_string(),
                "Migration / implementation (Assist)".to_string(),
            ],
            includes_lms: true,
            includes_creator: true,
            helper_text: Some("Pricing depends on scope — talk to sales.".to_string()),
            case_studies: None,
            pricing_examples: Vec::new(),
        },
    ]
}

fn standard_platform_fees() -> HashMap<PlanId, HashMap<String, Option<i64>>> {
    HashMap::from([
        (
            PlanId::CoreClassic,
            fee_table(&[
                ("users_50", Some(1990)),
                ("users_100", Some(2690)),
                ("users_250", Some(3590)),
                ("users_500", Some(4590)),
                ("users_1000", Some(6990)),
                ("users_2500", Some(12990)),
                ("users_5000", Some(22990)),
                ("users_10000_plus", None),
            ]),
        ),
        (
            PlanId::SuiteClassic,
            fee_table(&[
                ("users_50", Some(2000)),
                ("users_100", Some(3500)),
                ("users_250", Some(6000)),
                ("users_500", Some(10000)),
                ("users_1000", Some(17000)),
                ("users_2500", Some(35000)),
                ("users_5000", Some(60000)),
                ("users_10000_plus", None),
            ]),
        ),
        (
            PlanId::SuitePro,
            fee_table(&[
                ("users_50", Some(4000)),
                ("users_100", Some(6500)),
                ("users_250", Some(11000)),
                ("users_500", Some(18000)),
                ("users_1000", Some(30000)),
                ("users_2500", Some(55000)),
                ("users_5000", Some(95000)),
                ("users_10000_plus", None),
            ]),
        ),
    ])
}

fn fee_table(entries: &[(&str, Option<i64>)]) -> HashMap<String, Option<i64>> {
    entries
        .iter()
        .map(|(bucket_id, fee)| (bucket_id.to_string(), *fee))
        .collect()
}

fn validate_buckets(dimension: &'static str, buckets: &[BucketEntity]) -> Result<(), CatalogError> {
    if buckets.is_empty() {
        return Err(CatalogError::EmptyBuckets(dimension));
    }

    let mut seen = HashSet::new();
    for bucket in buckets {
        if !seen.insert(bucket.id.as_str()) {
            return Err(CatalogError::DuplicateBucketId(bucket.id.clone()));
        }
    }

    for pair in buckets.windows(2) {
        if pair[1].value <= pair[0].value {
            return Err(CatalogError::NonAscendingBuckets {
                dimension,
                bucket_id: pair[1].id.clone(),
            });
        }
    }

    let last = &buckets[buckets.len() - 1];
    if !last.value.is_unbounded() {
        return Err(CatalogError::MissingUnboundedTail(dimension));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid() {
        StandardCatalog::new().validate().unwrap();
    }

    #[test]
    fn plans_are_listed_in_display_order() {
        let catalog = StandardCatalog::new();
        let ids: Vec<PlanId> = catalog.plans().iter().map(|plan| plan.id).collect();

        assert_eq!(
            ids,
            vec![
                PlanId::Author,
                PlanId::CoreClassic,
                PlanId::SuiteClassic,
                PlanId::SuitePro,
                PlanId::Enterprise,
            ]
        );
    }

    #[test]
    fn platform_fee_distinguishes_missing_table_from_quote_only_tier() {
        let catalog = StandardCatalog::new();

        assert_eq!(
            catalog.platform_fee(PlanId::Author, "users_250"),
            FeeQuote::NotCharged
        );
        assert_eq!(
            catalog.platform_fee(PlanId::SuiteClassic, "users_250"),
            FeeQuote::Amount(6000)
        );
        assert_eq!(
            catalog.platform_fee(PlanId::SuiteClassic, "users_10000_plus"),
            FeeQuote::QuoteOnly
        );
        assert_eq!(
            catalog.platform_fee(PlanId::CoreClassic, "no_such_bucket"),
            FeeQuote::QuoteOnly
        );
    }

    #[test]
    fn rejects_buckets_out_of_order() {
        let mut catalog = StandardCatalog::new();
        catalog.creator_buckets.swap(1, 2);

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NonAscendingBuckets { dimension: "creators", .. })
        ));
    }

    #[test]
    fn rejects_bucket_sequence_without_unbounded_tail() {
        let mut catalog = StandardCatalog::new();
        catalog.active_users_buckets.pop();

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::MissingUnboundedTail("active_users"))
        ));
    }

    #[test]
    fn rejects_fee_table_with_unknown_bucket() {
        let mut catalog = StandardCatalog::new();
        catalog
            .platform_fees
            .get_mut(&PlanId::SuitePro)
            .unwrap()
            .insert("users_999".to_string(), Some(123));

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownFeeBucket { plan: PlanId::SuitePro, .. })
        ));
    }

    #[test]
    fn rejects_non_ascending_discount_tiers() {
        let mut catalog = StandardCatalog::new();
        catalog.volume_discounts[1].discount_percent = 5;

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::NonAscendingDiscountTiers)
        ));
    }

    #[test]
    fn json_round_trip_preserves_catalog() {
        let catalog = StandardCatalog::new();
        let raw = serde_json::to_string(&catalog).unwrap();
        let parsed = StandardCatalog::from_json_str(&raw).unwrap();

        assert_eq!(parsed, catalog);
    }

    #[test]
    fn from_json_str_rejects_malformed_input() {
        assert!(matches!(
            StandardCatalog::from_json_str("{ not json"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
