use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::{dashboard_tabs::DashboardTab, plan_tiers::PlanTier},
    plans::{FREE_MONTHLY_EARNINGS_WARN_MINOR, Plan},
};

/// Snapshot of a seller's plan and usage, fully resolved by the caller.
/// The evaluators below never re-fetch anything mid-computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerUsage {
    pub tier: PlanTier,
    pub product_count: u32,
    pub monthly_earnings_minor: i64,
}

impl SellerUsage {
    /// The store enforces no schema, so counters can come back negative or
    /// missing. Clamp instead of propagating a type error.
    pub fn new(tier: PlanTier, product_count: i64, monthly_earnings_minor: i64) -> Self {
        Self {
            tier,
            product_count: product_count.max(0) as u32,
            monthly_earnings_minor: monthly_earnings_minor.max(0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EarningsStatus {
    Ok,
    Warn,
    Blocked,
}

/// Whether the seller may add another product/service listing.
pub fn can_add_product(usage: &SellerUsage) -> bool {
    match Plan::for_tier(usage.tier).product_limit {
        Some(limit) => usage.product_count < limit,
        None => true,
    }
}

/// Where the seller stands against the monthly earnings cap. A seller at
/// exactly the cap is blocked, not warned.
pub fn earnings_status(usage: &SellerUsage) -> EarningsStatus {
    let Some(limit) = Plan::for_tier(usage.tier).monthly_earnings_limit_minor else {
        return EarningsStatus::Ok;
    };

    if usage.monthly_earnings_minor >= limit {
        EarningsStatus::Blocked
    } else if usage.monthly_earnings_minor >= FREE_MONTHLY_EARNINGS_WARN_MINOR {
        EarningsStatus::Warn
    } else {
        EarningsStatus::Ok
    }
}

/// Dashboard tabs visible to the seller. Products and Orders always show;
/// the rest follow the plan's feature flags.
pub fn visible_tabs(usage: &SellerUsage) -> Vec<DashboardTab> {
    let features = Plan::for_tier(usage.tier).features;

    let mut tabs = vec![DashboardTab::Products, DashboardTab::Orders];
    if features.reviews_tab {
        tabs.push(DashboardTab::Reviews);
    }
    if features.messages_tab {
        tabs.push(DashboardTab::Messages);
    }
    if features.analytics_tab {
        tabs.push(DashboardTab::Analytics);
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(product_count: i64, earnings_minor: i64) -> SellerUsage {
        SellerUsage::new(PlanTier::Free, product_count, earnings_minor)
    }

    fn premium(product_count: i64, earnings_minor: i64) -> SellerUsage {
        SellerUsage::new(PlanTier::Premium, product_count, earnings_minor)
    }

    #[test]
    fn free_seller_can_add_below_five_products() {
        assert!(can_add_product(&free(0, 0)));
        assert!(can_add_product(&free(4, 0)));
        assert!(!can_add_product(&free(5, 0)));
        assert!(!can_add_product(&free(17, 0)));
    }

    #[test]
    fn premium_seller_is_never_capped_on_products() {
        assert!(can_add_product(&premium(0, 0)));
        assert!(can_add_product(&premium(5, 0)));
        assert!(can_add_product(&premium(5_000, 0)));
    }

    #[test]
    fn earnings_boundaries_for_free_plan() {
        // ₹7,999 is fine, ₹8,000 warns, ₹10,000 blocks.
        assert_eq!(earnings_status(&free(0, 799_900)), EarningsStatus::Ok);
        assert_eq!(earnings_status(&free(0, 800_000)), EarningsStatus::Warn);
        assert_eq!(earnings_status(&free(0, 999_999)), EarningsStatus::Warn);
        assert_eq!(earnings_status(&free(0, 1_000_000)), EarningsStatus::Blocked);
        assert_eq!(earnings_status(&free(0, 2_000_000)), EarningsStatus::Blocked);
    }

    #[test]
    fn premium_earnings_always_ok() {
        assert_eq!(earnings_status(&premium(0, 0)), EarningsStatus::Ok);
        assert_eq!(
            earnings_status(&premium(0, 50_000_000)),
            EarningsStatus::Ok
        );
    }

    #[test]
    fn negative_counters_are_clamped() {
        let usage = SellerUsage::new(PlanTier::Free, -3, -10);
        assert_eq!(usage.product_count, 0);
        assert_eq!(usage.monthly_earnings_minor, 0);
        assert!(can_add_product(&usage));
        assert_eq!(earnings_status(&usage), EarningsStatus::Ok);
    }

    #[test]
    fn free_seller_sees_base_tabs_only() {
        assert_eq!(
            visible_tabs(&free(0, 0)),
            vec![DashboardTab::Products, DashboardTab::Orders]
        );
    }

    #[test]
    fn premium_seller_sees_all_tabs() {
        assert_eq!(
            visible_tabs(&premium(0, 0)),
            vec![
                DashboardTab::Products,
                DashboardTab::Orders,
                DashboardTab::Reviews,
                DashboardTab::Messages,
                DashboardTab::Analytics,
            ]
        );
    }

    #[test]
    fn evaluators_are_pure() {
        let usage = free(3, 850_000);
        assert_eq!(can_add_product(&usage), can_add_product(&usage));
        assert_eq!(earnings_status(&usage), earnings_status(&usage));
        assert_eq!(visible_tabs(&usage), visible_tabs(&usage));
    }
}
