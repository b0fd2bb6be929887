use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::orders::{InsertOrderEntity, OrderEntity},
        repositories::orders::OrderRepository,
        value_objects::{enums::order_statuses::OrderStatus, orders::OrderModel},
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::orders},
};

pub struct OrderPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl OrderPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl OrderRepository for OrderPostgres {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<OrderModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entity = orders::table
            .filter(orders::id.eq(order_id))
            .select(OrderEntity::as_select())
            .first::<OrderEntity>(&mut conn)
            .optional()?;

        Ok(entity.map(OrderModel::from))
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<OrderModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = orders::table
            .filter(orders::seller_id.eq(seller_id))
            .order(orders::created_at.desc())
            .select(OrderEntity::as_select())
            .load::<OrderEntity>(&mut conn)?;

        Ok(entities.into_iter().map(OrderModel::from).collect())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<OrderModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .order(orders::created_at.desc())
            .select(OrderEntity::as_select())
            .load::<OrderEntity>(&mut conn)?;

        Ok(entities.into_iter().map(OrderModel::from).collect())
    }

    async fn place(&self, insert_order_entity: InsertOrderEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(orders::table)
            .values(&insert_order_entity)
            .returning(orders::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn update_status(&self, order_id: Uuid, status: OrderStatus) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(orders::table)
            .filter(orders::id.eq(order_id))
            .set((
                orders::status.eq(status.to_string()),
                orders::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(orders::table)
            .filter(orders::seller_id.eq(seller_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }

    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(orders::table)
            .filter(orders::customer_id.eq(customer_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
