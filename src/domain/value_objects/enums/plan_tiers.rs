use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Seller subscription tier. Anything the store hands us that is not a
/// recognized tier resolves to Free, the most restrictive plan.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Premium,
}

impl Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plan_tier = match self {
            PlanTier::Free => "free",
            PlanTier::Premium => "premium",
        };
        write!(f, "{}", plan_tier)
    }
}

impl From<&str> for PlanTier {
    fn from(value: &str) -> Self {
        match value {
            "premium" => PlanTier::Premium,
            _ => PlanTier::Free,
        }
    }
}
