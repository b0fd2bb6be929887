use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::products::{InsertProductEntity, ProductEntity},
        repositories::products::ProductRepository,
        value_objects::products::ProductModel,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::products},
};

pub struct ProductPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ProductPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ProductRepository for ProductPostgres {
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = products::table
            .filter(products::seller_id.eq(seller_id))
            .order(products::created_at.desc())
            .select(ProductEntity::as_select())
            .load::<ProductEntity>(&mut conn)?;

        Ok(entities.into_iter().map(ProductModel::from).collect())
    }

    async fn count_by_seller(&self, seller_id: Uuid) -> Result<i64> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let count = products::table
            .filter(products::seller_id.eq(seller_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count)
    }

    async fn add(&self, insert_product_entity: InsertProductEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(products::table)
            .values(&insert_product_entity)
            .returning(products::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(products::table)
            .filter(products::seller_id.eq(seller_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
