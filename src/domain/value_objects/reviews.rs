use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewModel {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertReviewModel {
    pub booking_id: Uuid,
    pub rating: i32,
    pub comment: String,
}
