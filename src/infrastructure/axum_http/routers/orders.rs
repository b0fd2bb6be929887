use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use uuid::Uuid;

use crate::{
    application::usecases::order_workflow::OrderWorkflowUseCase,
    domain::{
        repositories::{orders::OrderRepository, sellers::SellerRepository},
        value_objects::orders::{InsertOrderModel, UpdateOrderStatusModel},
    },
    infrastructure::{
        axum_http::{
            auth::AuthUser,
            error_responses::{AppError, error_response},
        },
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{orders::OrderPostgres, sellers::SellerPostgres},
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let order_repository = Arc::new(OrderPostgres::new(Arc::clone(&db_pool)));
    let seller_repository = Arc::new(SellerPostgres::new(Arc::clone(&db_pool)));
    let order_workflow_usecase = OrderWorkflowUseCase::new(order_repository, seller_repository);

    Router::new()
        .route("/", post(place_order))
        .route("/", get(list_orders))
        .route("/:order_id/status", patch(update_order_status))
        .with_state(Arc::new(order_workflow_usecase))
}

pub async fn place_order<O, S>(
    State(order_workflow_usecase): State<Arc<OrderWorkflowUseCase<O, S>>>,
    auth: AuthUser,
    Json(insert_order_model): Json<InsertOrderModel>,
) -> impl IntoResponse
where
    O: OrderRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    if !auth.is_customer() {
        return AppError::Forbidden("customer account required".to_string()).into_response();
    }

    match order_workflow_usecase
        .place(auth.user_id, insert_order_model)
        .await
    {
        Ok(order_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": order_id })),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

/// Sellers see orders placed with them, customers the ones they placed.
pub async fn list_orders<O, S>(
    State(order_workflow_usecase): State<Arc<OrderWorkflowUseCase<O, S>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    O: OrderRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    let result = if auth.is_seller() {
        order_workflow_usecase.list_by_seller(auth.user_id).await
    } else {
        order_workflow_usecase.list_by_customer(auth.user_id).await
    };

    match result {
        Ok(orders) => (StatusCode::OK, Json(orders)).into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

pub async fn update_order_status<O, S>(
    State(order_workflow_usecase): State<Arc<OrderWorkflowUseCase<O, S>>>,
    auth: AuthUser,
    Path(order_id): Path<Uuid>,
    Json(update_order_status_model): Json<UpdateOrderStatusModel>,
) -> impl IntoResponse
where
    O: OrderRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    match order_workflow_usecase
        .update_status(auth.user_id, order_id, update_order_status_model.status)
        .await
    {
        Ok(()) => (StatusCode::OK, "Order status updated").into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}
