use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    domain::value_objects::products::ProductModel, infrastructure::postgres::schema::products,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = products)]
pub struct ProductEntity {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub struct InsertProductEntity {
    pub seller_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_minor: i64,
    pub is_active: bool,
}

impl From<ProductEntity> for ProductModel {
    fn from(value: ProductEntity) -> Self {
        Self {
            id: value.id,
            seller_id: value.seller_id,
            name: value.name,
            description: value.description,
            price_minor: value.price_minor,
            is_active: value.is_active,
            created_at: value.created_at,
        }
    }
}
