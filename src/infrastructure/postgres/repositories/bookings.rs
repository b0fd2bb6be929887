use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::bookings::{BookingEntity, InsertBookingEntity},
        repositories::bookings::BookingRepository,
        value_objects::{bookings::BookingModel, enums::booking_statuses::BookingStatus},
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::bookings},
};

pub struct BookingPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BookingPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BookingRepository for BookingPostgres {
    async fn find_by_id(&self, booking_id: Uuid) -> Result<Option<BookingModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entity = bookings::table
            .filter(bookings::id.eq(booking_id))
            .select(BookingEntity::as_select())
            .first::<BookingEntity>(&mut conn)
            .optional()?;

        Ok(entity.map(BookingModel::from))
    }

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<BookingModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = bookings::table
            .filter(bookings::seller_id.eq(seller_id))
            .order(bookings::created_at.desc())
            .select(BookingEntity::as_select())
            .load::<BookingEntity>(&mut conn)?;

        Ok(entities.into_iter().map(BookingModel::from).collect())
    }

    async fn list_by_customer(&self, customer_id: Uuid) -> Result<Vec<BookingModel>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let entities = bookings::table
            .filter(bookings::customer_id.eq(customer_id))
            .order(bookings::created_at.desc())
            .select(BookingEntity::as_select())
            .load::<BookingEntity>(&mut conn)?;

        Ok(entities.into_iter().map(BookingModel::from).collect())
    }

    async fn place(&self, insert_booking_entity: InsertBookingEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(bookings::table)
            .values(&insert_booking_entity)
            .returning(bookings::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn update_status(&self, booking_id: Uuid, status: BookingStatus) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(bookings::table)
            .filter(bookings::id.eq(booking_id))
            .set((
                bookings::status.eq(status.to_string()),
                bookings::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn mark_reviewed(&self, booking_id: Uuid) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(bookings::table)
            .filter(bookings::id.eq(booking_id))
            .set((
                bookings::is_reviewed.eq(true),
                bookings::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn delete_by_seller(&self, seller_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(bookings::table)
            .filter(bookings::seller_id.eq(seller_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }

    async fn delete_by_customer(&self, customer_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(bookings::table)
            .filter(bookings::customer_id.eq(customer_id))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
