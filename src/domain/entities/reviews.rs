use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::reviews::ReviewModel, infrastructure::postgres::schema::reviews,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = reviews)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub struct InsertReviewEntity {
    pub booking_id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub rating: i32,
    pub comment: String,
}

impl From<ReviewEntity> for ReviewModel {
    fn from(value: ReviewEntity) -> Self {
        Self {
            id: value.id,
            booking_id: value.booking_id,
            seller_id: value.seller_id,
            customer_id: value.customer_id,
            rating: value.rating,
            comment: value.comment,
            created_at: value.created_at,
        }
    }
}
