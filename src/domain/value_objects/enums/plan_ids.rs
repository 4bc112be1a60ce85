use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fixed set of catalog plans; the catalog lists them in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlanId {
    Author,
    CoreClassic,
    SuiteClassic,
    SuitePro,
    Enterprise,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Author => "author",
            PlanId::CoreClassic => "core_classic",
            PlanId::SuiteClassic => "suite_classic",
            PlanId::SuitePro => "suite_pro",
            PlanId::Enterprise => "enterprise",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "author" => Some(PlanId::Author),
            "core_classic" => Some(PlanId::CoreClassic),
            "suite_classic" => Some(PlanId::SuiteClassic),
            "suite_pro" => Some(PlanId::SuitePro),
            "enterprise" => Some(PlanId::Enterprise),
            _ => None,
        }
    }
}

impl Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
