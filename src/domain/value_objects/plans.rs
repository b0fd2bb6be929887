use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::plan_tiers::PlanTier;

/// Free-plan product cap.
pub const FREE_PRODUCT_LIMIT: u32 = 5;

/// Free-plan monthly earnings cap, in paise (₹10,000).
pub const FREE_MONTHLY_EARNINGS_LIMIT_MINOR: i64 = 1_000_000;

/// Earnings level at which the free plan starts warning (₹8,000).
pub const FREE_MONTHLY_EARNINGS_WARN_MINOR: i64 = 800_000;

/// Feature flags attached to a plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlanFeatures {
    pub reviews_tab: bool,
    pub messages_tab: bool,
    pub analytics_tab: bool,
    pub priority_listing: bool,
}

/// Limits and flags for a subscription tier. `None` limits are unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub tier: PlanTier,
    pub product_limit: Option<u32>,
    pub monthly_earnings_limit_minor: Option<i64>,
    pub features: PlanFeatures,
}

impl Plan {
    /// Static registry lookup. Never fails: there are exactly two plans, and
    /// an unknown tier has already collapsed to Free during parsing.
    pub fn for_tier(tier: PlanTier) -> Plan {
        match tier {
            PlanTier::Free => Plan {
                tier: PlanTier::Free,
                product_limit: Some(FREE_PRODUCT_LIMIT),
                monthly_earnings_limit_minor: Some(FREE_MONTHLY_EARNINGS_LIMIT_MINOR),
                features: PlanFeatures::default(),
            },
            PlanTier::Premium => Plan {
                tier: PlanTier::Premium,
                product_limit: None,
                monthly_earnings_limit_minor: None,
                features: PlanFeatures {
                    reviews_tab: true,
                    messages_tab: true,
                    analytics_tab: true,
                    priority_listing: true,
                },
            },
        }
    }
}
