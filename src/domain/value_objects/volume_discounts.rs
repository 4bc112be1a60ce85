use serde::{Deserialize, Serialize};

/// Threshold rule granting a discount percentage once the creator count
/// reaches `min_creators`. Tiers are stored ascending in both fields and the
/// highest applicable tier wins; discounts never stack.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeDiscountTier {
    pub min_creators: u32,
    pub discount_percent: u8,
}

/// Which volume tier a creator count falls into, for display chips.
/// `range_label` is `None` below the first tier.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VolumeTierInfo {
    pub discount_percent: u8,
    pub range_label: Option<String>,
}
