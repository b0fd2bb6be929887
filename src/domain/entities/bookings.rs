use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::{bookings::BookingModel, enums::booking_statuses::BookingStatus},
    infrastructure::postgres::schema::bookings,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = bookings)]
pub struct BookingEntity {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub service_name: String,
    pub status: String,
    pub service_fee_minor: i64,
    pub selected_date: NaiveDate,
    pub selected_time_slot: String,
    pub location: Option<String>,
    pub is_reviewed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub struct InsertBookingEntity {
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub service_name: String,
    pub status: String,
    pub service_fee_minor: i64,
    pub selected_date: NaiveDate,
    pub selected_time_slot: String,
    pub location: Option<String>,
    pub is_reviewed: bool,
}

impl From<BookingEntity> for BookingModel {
    fn from(value: BookingEntity) -> Self {
        Self {
            id: value.id,
            seller_id: value.seller_id,
            customer_id: value.customer_id,
            service_name: value.service_name,
            status: BookingStatus::from(value.status.as_str()),
            service_fee_minor: value.service_fee_minor,
            selected_date: value.selected_date,
            selected_time_slot: value.selected_time_slot,
            location: value.location,
            is_reviewed: value.is_reviewed,
            created_at: value.created_at,
        }
    }
}
