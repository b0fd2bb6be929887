use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::reviews::{InsertReviewEntity, ReviewEntity},
        repositories::reviews::ReviewRepository,
        value_objects::reviews::ReviewModel,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::reviews},
};

pub struct ReviewPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ReviewPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewPostgres {
    async fn add(&self, insert_review_entity: InsertReviewEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(reviews::table)
            .values(&insert_review_entity)
            .returning(reviews::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ReviewModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = reviews::table
            .filter(reviews::seller_id.eq(seller_id))
            .order(reviews::created_at.desc())
            .select(ReviewEntity::as_select())
            .load::<ReviewEntity>(&mut conn)?;

        Ok(entities.into_iter().map(ReviewModel::from).collect())
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(reviews::table)
            .filter(reviews::seller_id.eq(seller_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }

    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(reviews::table)
            .filter(reviews::customer_id.eq(customer_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
