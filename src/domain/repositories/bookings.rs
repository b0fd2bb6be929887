use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::bookings::InsertBookingEntity,
    value_objects::{bookings::BookingModel, enums::booking_statuses::BookingStatus},
};

#[async_trait]
#[automock]
pub trait BookingRepository {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingModel>>;
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<BookingModel>>;
    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<BookingModel>>;
    async fn place(&self, insert_booking_entity: InsertBookingEntity) -> Result<Uuid>;
    async fn update_status(&self, booking_id: Uuid, status: BookingStatus) -> Result<()>;
    async fn mark_reviewed(&self, booking_id: Uuid) -> Result<()>;
    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize>;
    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize>;
}
