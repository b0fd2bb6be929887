use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{entities::reviews::InsertReviewEntity, value_objects::reviews::ReviewModel};

#[async_trait]
#[automock]
pub trait ReviewRepository {
    async fn add(&self, insert_review_entity: InsertReviewEntity) -> Result<Uuid>;
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ReviewModel>>;
    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize>;
    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize>;
}
