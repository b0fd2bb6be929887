use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::{enums::order_statuses::OrderStatus, orders::OrderModel},
    infrastructure::postgres::schema::orders,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = orders)]
pub struct OrderEntity {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_amount_minor: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct InsertOrderEntity {
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub status: String,
    pub total_amount_minor: i64,
}

impl From<OrderEntity> for OrderModel {
    fn from(value: OrderEntity) -> Self {
        Self {
            id: value.id,
            seller_id: value.seller_id,
            customer_id: value.customer_id,
            status: OrderStatus::from(value.status.as_str()),
            total_amount_minor: value.total_amount_minor,
            created_at: value.created_at,
        }
    }
}
