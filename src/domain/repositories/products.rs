use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::products::InsertProductEntity, value_objects::products::ProductModel,
};

#[async_trait]
#[automock]
pub trait ProductRepository {
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductModel>>;
    async fn count_by_seller(&self, seller_id: Uuid) -> Result<i64>;
    async fn add(&self, insert_product_entity: InsertProductEntity) -> Result<Uuid>;
    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize>;
}
