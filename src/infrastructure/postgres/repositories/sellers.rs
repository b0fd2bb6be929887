use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::sellers::{InsertSellerEntity, SellerEntity},
        repositories::sellers::SellerRepository,
        value_objects::{enums::plan_tiers::PlanTier, sellers::SellerModel},
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::sellers},
};

pub struct SellerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SellerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SellerRepository for SellerPostgres {
    async fn find_by_id(&self, seller_id: Uuid) -> Result<SellerModel> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entity = sellers::table
            .filter(sellers::id.eq(seller_id))
            .select(SellerEntity::as_select())
            .first::<SellerEntity>(&mut conn)?;

        Ok(entity.into())
    }

    async fn register(&self, insert_seller_entity: InsertSellerEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(sellers::table)
            .values(&insert_seller_entity)
            .returning(sellers::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn set_tier(&self, seller_id: Uuid, tier: PlanTier) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(sellers::table)
            .filter(sellers::id.eq(seller_id))
            .set(sellers::subscription_plan.eq(tier.to_string()))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn set_product_count(&self, seller_id: Uuid, product_count: i32) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(sellers::table)
            .filter(sellers::id.eq(seller_id))
            .set(sellers::product_count.eq(product_count))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn set_monthly_earnings(&self, seller_id: Uuid, amount_minor: i64) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(sellers::table)
            .filter(sellers::id.eq(seller_id))
            .set(sellers::monthly_earnings_minor.eq(amount_minor))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete(&self, seller_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(sellers::table)
            .filter(sellers::id.eq(seller_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
