//! Single source of truth for volume-tier resolution. Both the pricing
//! resolver and any tier-aware widget go through these functions so the
//! displayed tier can never drift from the priced one.

use crate::domain::value_objects::volume_discounts::{VolumeDiscountTier, VolumeTierInfo};

/// Discount percent for a creator count, 0 below the first tier. The highest
/// applicable tier wins; discounts never stack.
pub fn applicable_discount_percent(tiers: &[VolumeDiscountTier], creator_count: u32) -> u8 {
    tiers
        .iter()
        .filter(|tier| creator_count >= tier.min_creators)
        .map(|tier| tier.discount_percent)
        .max()
        .unwrap_or(0)
}

/// Tier membership for display: the discount percent plus a human-readable
/// range such as "5-9" or "20+" for the last tier.
pub fn tier_info(tiers: &[VolumeDiscountTier], creator_count: u32) -> VolumeTierInfo {
    let position = tiers
        .iter()
        .rposition(|tier| creator_count >= tier.min_creators);

    match position {
        None => VolumeTierInfo {
            discount_percent: 0,
            range_label: None,
        },
        Some(index) => {
            let tier = &tiers[index];
            let range_label = match tiers.get(index + 1) {
                Some(next) => format!("{}-{}", tier.min_creators, next.min_creators - 1),
                None => format!("{}+", tier.min_creators),
            };

            VolumeTierInfo {
                discount_percent: tier.discount_percent,
                range_label: Some(range_label),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_tiers() -> Vec<VolumeDiscountTier> {
        vec![
            VolumeDiscountTier { min_creators: 3, discount_percent: 10 },
            VolumeDiscountTier { min_creators: 5, discount_percent: 20 },
            VolumeDiscountTier { min_creators: 10, discount_percent: 30 },
            VolumeDiscountTier { min_creators: 20, discount_percent: 40 },
        ]
    }

    #[test]
    fn no_discount_below_first_tier() {
        let tiers = standard_tiers();

        assert_eq!(applicable_discount_percent(&tiers, 1), 0);
        assert_eq!(applicable_discount_percent(&tiers, 2), 0);
    }

    #[test]
    fn discount_applies_exactly_at_each_threshold() {
        let tiers = standard_tiers();

        assert_eq!(applicable_discount_percent(&tiers, 3), 10);
        assert_eq!(applicable_discount_percent(&tiers, 5), 20);
        assert_eq!(applicable_discount_percent(&tiers, 10), 30);
        assert_eq!(applicable_discount_percent(&tiers, 20), 40);
    }

    #[test]
    fn highest_matching_tier_wins() {
        let tiers = standard_tiers();

        assert_eq!(applicable_discount_percent(&tiers, 4), 10);
        assert_eq!(applicable_discount_percent(&tiers, 19), 30);
        assert_eq!(applicable_discount_percent(&tiers, 500), 40);
    }

    #[test]
    fn tier_info_reports_bounded_ranges() {
        let tiers = standard_tiers();

        let info = tier_info(&tiers, 4);
        assert_eq!(info.discount_percent, 10);
        assert_eq!(info.range_label.as_deref(), Some("3-4"));

        let info = tier_info(&tiers, 7);
        assert_eq!(info.discount_percent, 20);
        assert_eq!(info.range_label.as_deref(), Some("5-9"));
    }

    #[test]
    fn tier_info_marks_last_tier_open_ended() {
        let tiers = standard_tiers();

        let info = tier_info(&tiers, 35);
        assert_eq!(info.discount_percent, 40);
        assert_eq!(info.range_label.as_deref(), Some("20+"));
    }

    #[test]
    fn tier_info_below_first_tier_has_no_range() {
        let tiers = standard_tiers();

        let info = tier_info(&tiers, 2);
        assert_eq!(info.discount_percent, 0);
        assert_eq!(info.range_label, None);
    }
}
