use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{
    entitlements::{EarningsStatus, SellerUsage},
    enums::{dashboard_tabs::DashboardTab, plan_tiers::PlanTier, seller_modes::SellerMode},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerModel {
    pub id: Uuid,
    pub display_name: String,
    pub business_name: String,
    pub mode: SellerMode,
    pub tier: PlanTier,
    /// Denormalized counters. Treated as a cache of the aggregator's answer,
    /// never as ground truth.
    pub product_count: i32,
    pub monthly_earnings_minor: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertSellerModel {
    pub display_name: String,
    pub business_name: String,
    pub mode: SellerMode,
    pub tier: PlanTier,
}

/// Everything the seller dashboard needs in one response: the fresh usage
/// snapshot plus the gating answers derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SellerDashboardDto {
    pub seller: SellerModel,
    pub usage: SellerUsage,
    pub tabs: Vec<DashboardTab>,
    pub earnings_status: EarningsStatus,
    pub monthly_earnings_limit_minor: Option<i64>,
}
