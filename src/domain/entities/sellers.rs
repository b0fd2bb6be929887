use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::{
        enums::{plan_tiers::PlanTier, seller_modes::SellerMode},
        sellers::SellerModel,
    },
    infrastructure::postgres::schema::sellers,
};

/// Raw row used for Diesel queries. Tier and mode stay as text and are
/// parsed (fail-closed) into their enums.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = sellers)]
pub struct SellerEntity {
    pub id: Uuid,
    pub display_name: String,
    pub business_name: String,
    pub mode: String,
    pub subscription_plan: String,
    pub product_count: i32,
    pub monthly_earnings_minor: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = sellers)]
pub struct InsertSellerEntity {
    /// Identity comes from the auth provider, not a DB default.
    pub id: Uuid,
    pub display_name: String,
    pub business_name: String,
    pub mode: String,
    pub subscription_plan: String,
    pub product_count: i32,
    pub monthly_earnings_minor: i64,
}

impl From<SellerEntity> for SellerModel {
    fn from(value: SellerEntity) -> Self {
        Self {
            id: value.id,
            display_name: value.display_name,
            business_name: value.business_name,
            mode: SellerMode::from(value.mode.as_str()),
            tier: PlanTier::from(value.subscription_plan.as_str()),
            product_count: value.product_count.max(0),
            monthly_earnings_minor: value.monthly_earnings_minor.max(0),
            created_at: value.created_at,
        }
    }
}
