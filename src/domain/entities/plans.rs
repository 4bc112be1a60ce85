use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::plan_ids::PlanId;

/// Static plan descriptor. Loaded once with the catalog and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntity {
    pub id: PlanId,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub is_highlighted: bool,
    pub cta_label: String,
    pub cta_base_url: String,
    pub features: Vec<String>,
    /// Whether the plan delivers courses to active users (LMS included).
    pub includes_lms: bool,
    /// Whether the plan bills per course creator.
    pub includes_creator: bool,
    #[serde(default)]
    pub helper_text: Option<String>,
    #[serde(default)]
    pub case_studies: Option<String>,
    #[serde(default)]
    pub pricing_examples: Vec<String>,
}
