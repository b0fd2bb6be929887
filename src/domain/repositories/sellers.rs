use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::sellers::InsertSellerEntity,
    value_objects::{enums::plan_tiers::PlanTier, sellers::SellerModel},
};

#[async_trait]
#[automock]
pub trait SellerRepository {
    async fn find_by_id(&self, seller_id: Uuid) -> Result<SellerModel>;
    async fn register(&self, insert_seller_entity: InsertSellerEntity) -> Result<Uuid>;
    async fn set_tier(&self, seller_id: Uuid, tier: PlanTier) -> Result<()>;
    async fn set_product_count(&self, seller_id: Uuid, product_count: i32) -> Result<()>;
    async fn set_monthly_earnings(&self, seller_id: Uuid, amount_minor: i64) -> Result<()>;
    async fn delete(&self, seller_id: Uuid) -> Result<usize>;
}
