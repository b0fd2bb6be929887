use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::repositories::chats::ChatRepository,
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::chats},
};

pub struct ChatPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl ChatPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ChatRepository for ChatPostgres {
    async fn delete_by_participant(&self, user_id: Uuid) -> Result<usize> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let deleted = delete(chats::table)
            .filter(chats::seller_id.eq(user_id).or(chats::customer_id.eq(user_id)))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
