use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::orders::InsertOrderEntity,
    repositories::{orders::OrderRepository, sellers::SellerRepository},
    value_objects::{
        enums::order_statuses::OrderStatus,
        orders::{InsertOrderModel, OrderModel},
    },
};

#[derive(Debug, Error)]
pub enum OrderWorkflowError {
    #[error("order not found")]
    OrderNotFound,
    #[error("order does not belong to this seller")]
    NotSellerOrder,
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
    #[error("order amount must be positive")]
    InvalidAmount,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl OrderWorkflowError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            OrderWorkflowError::OrderNotFound => StatusCode::NOT_FOUND,
            OrderWorkflowError::NotSellerOrder => StatusCode::FORBIDDEN,
            OrderWorkflowError::InvalidTransition { .. } | OrderWorkflowError::InvalidAmount => {
                StatusCode::BAD_REQUEST
            }
            OrderWorkflowError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, OrderWorkflowError>;

/// Single write boundary for order statuses. The status column is free text
/// in the store, so every write is validated against the transition table
/// here and nowhere else.
pub struct OrderWorkflowUseCase<O, S>
where
    O: OrderRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    order_repository: Arc<O>,
    seller_repository: Arc<S>,
}

impl<O, S> OrderWorkflowUseCase<O, S>
where
    O: OrderRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    pub fn new(order_repository: Arc<O>, seller_repository: Arc<S>) -> Self {
        Self {
            order_repository,
            seller_repository,
        }
    }

    pub async fn place(
        &self,
        customer_id: Uuid,
        insert_order_model: InsertOrderModel,
    ) -> UseCaseResult<Uuid> {
        if insert_order_model.total_amount_minor <= 0 {
            return Err(OrderWorkflowError::InvalidAmount);
        }

        let order_id = self
            .order_repository
            .place(InsertOrderEntity {
                seller_id: insert_order_model.seller_id,
                customer_id,
                status: OrderStatus::Pending.to_string(),
                total_amount_minor: insert_order_model.total_amount_minor,
            })
            .await?;

        info!(
            %order_id,
            seller_id = %insert_order_model.seller_id,
            %customer_id,
            "order_workflow: order placed"
        );

        Ok(order_id)
    }

    pub async fn update_status(
        &self,
        seller_id: Uuid,
        order_id: Uuid,
        next: OrderStatus,
    ) -> UseCaseResult<()> {
        let order = self
            .order_repository
            .find_by_id(order_id)
            .await?
            .ok_or(OrderWorkflowError::OrderNotFound)?;

        if order.seller_id != seller_id {
            warn!(%seller_id, %order_id, "order_workflow: seller does not own order");
            return Err(OrderWorkflowError::NotSellerOrder);
        }

        if !order.status.can_transition_to(next) {
            warn!(
                %order_id,
                from = %order.status,
                to = %next,
                "order_workflow: rejected status transition"
            );
            return Err(OrderWorkflowError::InvalidTransition {
                from: order.status,
                to: next,
            });
        }

        self.order_repository.update_status(order_id, next).await?;
        info!(%order_id, from = %order.status, to = %next, "order_workflow: status updated");

        // Completed orders roll into the cached earnings counter. The counter
        // is a fast-path cache; reconciliation recomputes it from orders.
        if next == OrderStatus::Completed {
            self.roll_into_earnings(&order).await?;
        }

        Ok(())
    }

    pub async fn list_by_seller(&self, seller_id: Uuid) -> UseCaseResult<Vec<OrderModel>> {
        Ok(self.order_repository.list_by_seller(seller_id).await?)
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> UseCaseResult<Vec<OrderModel>> {
        Ok(self.order_repository.list_by_customer(customer_id).await?)
    }

    async fn roll_into_earnings(&self, order: &OrderModel) -> UseCaseResult<()> {
        let seller = self.seller_repository.find_by_id(order.seller_id).await?;
        let updated = seller.monthly_earnings_minor + order.total_amount_minor.max(0);

        self.seller_repository
            .set_monthly_earnings(order.seller_id, updated)
            .await?;

        info!(
            seller_id = %order.seller_id,
            earnings_minor = updated,
            "order_workflow: cached earnings counter updated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        orders::MockOrderRepository, sellers::MockSellerRepository,
    };
    use crate::domain::value_objects::{
        enums::{plan_tiers::PlanTier, seller_modes::SellerMode},
        sellers::SellerModel,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_order(seller_id: Uuid, status: OrderStatus) -> OrderModel {
        OrderModel {
            id: Uuid::new_v4(),
            seller_id,
            customer_id: Uuid::new_v4(),
            status,
            total_amount_minor: 50_000,
            created_at: Utc::now(),
        }
    }

    fn sample_seller(id: Uuid, monthly_earnings_minor: i64) -> SellerModel {
        let now = Utc::now();
        SellerModel {
            id,
            display_name: "Asha".to_string(),
            business_name: "Asha's Kitchen".to_string(),
            mode: SellerMode::Seller,
            tier: PlanTier::Free,
            product_count: 2,
            monthly_earnings_minor,
            created_at: now,
        }
    }

    #[tokio::test]
    async fn valid_transition_is_written() {
        let seller_id = Uuid::new_v4();
        let order = sample_order(seller_id, OrderStatus::Pending);
        let order_id = order.id;

        let mut order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();

        order_repo
            .expect_find_by_id()
            .with(eq(order_id))
            .returning(move |_| {
                let order = order.clone();
                Box::pin(async move { Ok(Some(order)) })
            });
        order_repo
            .expect_update_status()
            .with(eq(order_id), eq(OrderStatus::Accepted))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        usecase
            .update_status(seller_id, order_id, OrderStatus::Accepted)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn skipping_to_completed_is_rejected() {
        let seller_id = Uuid::new_v4();
        let order = sample_order(seller_id, OrderStatus::Pending);
        let order_id = order.id;

        let mut order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();

        order_repo.expect_find_by_id().returning(move |_| {
            let order = order.clone();
            Box::pin(async move { Ok(Some(order)) })
        });

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        let result = usecase
            .update_status(seller_id, order_id, OrderStatus::Completed)
            .await;

        assert!(matches!(
            result,
            Err(OrderWorkflowError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Completed,
            })
        ));
    }

    #[tokio::test]
    async fn completing_an_order_rolls_amount_into_counter() {
        let seller_id = Uuid::new_v4();
        let order = sample_order(seller_id, OrderStatus::Ready);
        let order_id = order.id;

        let mut order_repo = MockOrderRepository::new();
        let mut seller_repo = MockSellerRepository::new();

        order_repo.expect_find_by_id().returning(move |_| {
            let order = order.clone();
            Box::pin(async move { Ok(Some(order)) })
        });
        order_repo
            .expect_update_status()
            .returning(|_, _| Box::pin(async { Ok(()) }));
        seller_repo
            .expect_find_by_id()
            .with(eq(seller_id))
            .returning(move |id| {
                let seller = sample_seller(id, 100_000);
                Box::pin(async move { Ok(seller) })
            });
        seller_repo
            .expect_set_monthly_earnings()
            .with(eq(seller_id), eq(150_000i64))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        usecase
            .update_status(seller_id, order_id, OrderStatus::Completed)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn another_sellers_order_cannot_be_updated() {
        let order = sample_order(Uuid::new_v4(), OrderStatus::Pending);
        let order_id = order.id;

        let mut order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();

        order_repo.expect_find_by_id().returning(move |_| {
            let order = order.clone();
            Box::pin(async move { Ok(Some(order)) })
        });

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        let result = usecase
            .update_status(Uuid::new_v4(), order_id, OrderStatus::Accepted)
            .await;

        assert!(matches!(result, Err(OrderWorkflowError::NotSellerOrder)));
    }

    #[tokio::test]
    async fn non_positive_amount_is_rejected_at_placement() {
        let order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();
        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        let result = usecase
            .place(
                Uuid::new_v4(),
                InsertOrderModel {
                    seller_id: Uuid::new_v4(),
                    total_amount_minor: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(OrderWorkflowError::InvalidAmount)));
    }

    #[tokio::test]
    async fn missing_order_maps_to_not_found() {
        let mut order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();

        order_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        let result = usecase
            .update_status(Uuid::new_v4(), Uuid::new_v4(), OrderStatus::Accepted)
            .await;

        assert!(matches!(result, Err(OrderWorkflowError::OrderNotFound)));
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_as_internal_not_as_missing_order() {
        let mut order_repo = MockOrderRepository::new();
        let seller_repo = MockSellerRepository::new();

        order_repo.expect_find_by_id().returning(|_| {
            Box::pin(async { Err(anyhow::anyhow!("connection reset by peer")) })
        });

        let usecase = OrderWorkflowUseCase::new(Arc::new(order_repo), Arc::new(seller_repo));

        let error = usecase
            .update_status(Uuid::new_v4(), Uuid::new_v4(), OrderStatus::Accepted)
            .await
            .unwrap_err();

        assert!(matches!(error, OrderWorkflowError::Internal(_)));
        assert_eq!(
            error.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
