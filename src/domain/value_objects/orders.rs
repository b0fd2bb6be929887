use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::enums::order_statuses::OrderStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderModel {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,
    pub status: OrderStatus,
    pub total_amount_minor: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertOrderModel {
    pub seller_id: Uuid,
    pub total_amount_minor: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusModel {
    pub status: OrderStatus,
}
