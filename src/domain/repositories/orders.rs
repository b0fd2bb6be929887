use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::orders::InsertOrderEntity,
    value_objects::{enums::order_statuses::OrderStatus, orders::OrderModel},
};

#[async_trait]
#[automock]
pub trait OrderRepository {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<OrderModel>>;
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<OrderModel>>;
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<OrderModel>>;
    async fn place(&self, insert_order_entity: InsertOrderEntity) -> Result<Uuid>;
    async fn update_status(&self, order_id: Uuid, status: OrderStatus) -> Result<()>;
    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize>;
    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize>;
}
