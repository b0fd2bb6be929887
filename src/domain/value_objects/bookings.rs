use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::booking_statuses::BookingStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingModel {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub service_name: String,
    pub status: BookingStatus,
    pub service_fee_minor: i64,
    pub selected_date: NaiveDate,
    /// Raw `"HH:MM - HH:MM"` string as stored; parsed lazily where needed.
    pub selected_time_slot: String,
    pub location: Option<String>,
    pub is_reviewed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertBookingModel {
    pub seller_id: Uuid,
    pub service_name: String,
    pub service_fee_minor: i64,
    pub selected_date: NaiveDate,
    pub selected_time_slot: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatusModel {
    pub status: BookingStatus,
}
