use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

#[async_trait]
#[automock]
pub trait ChatRepository {
    async fn delete_by_participant(&self, user_id: Uuid) -> Result<usize>;
}
