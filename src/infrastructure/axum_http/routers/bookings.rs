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
    application::usecases::booking_workflow::BookingWorkflowUseCase,
    domain::{
        repositories::{bookings::BookingRepository, sellers::SellerRepository},
        value_objects::bookings::{InsertBookingModel, UpdateBookingStatusModel},
    },
    infrastructure::{
        axum_http::{
            auth::AuthUser,
            error_responses::{AppError, error_response},
        },
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{bookings::BookingPostgres, sellers::SellerPostgres},
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let booking_repository = Arc::new(BookingPostgres::new(Arc::clone(&db_pool)));
    let seller_repository = Arc::new(SellerPostgres::new(Arc::clone(&db_pool)));
    let booking_workflow_usecase =
        BookingWorkflowUseCase::new(booking_repository, seller_repository);

    Router::new()
        .route("/", post(place_booking))
        .route("/", get(list_bookings))
        .route("/:booking_id/status", patch(update_booking_status))
        .with_state(Arc::new(booking_workflow_usecase))
}

pub async fn place_booking<B, S>(
    State(booking_workflow_usecase): State<Arc<BookingWorkflowUseCase<B, S>>>,
    auth: AuthUser,
    Json(insert_booking_model): Json<InsertBookingModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    if !auth.is_customer() {
        return AppError::Forbidden("customer account required".to_string()).into_response();
    }

    match booking_workflow_usecase
        .place(auth.user_id, insert_booking_model)
        .await
    {
        Ok(booking_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": booking_id })),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

/// Sellers see bookings made with them, customers the ones they made.
pub async fn list_bookings<B, S>(
    State(booking_workflow_usecase): State<Arc<BookingWorkflowUseCase<B, S>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    let result = if auth.is_seller() {
        booking_workflow_usecase.list_by_seller(auth.user_id).await
    } else {
        booking_workflow_usecase
            .list_by_customer(auth.user_id)
            .await
    };

    match result {
        Ok(bookings) => (StatusCode::OK, Json(bookings)).into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

pub async fn update_booking_status<B, S>(
    State(booking_workflow_usecase): State<Arc<BookingWorkflowUseCase<B, S>>>,
    auth: AuthUser,
    Path(booking_id): Path<Uuid>,
    Json(update_booking_status_model): Json<UpdateBookingStatusModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    match booking_workflow_usecase
        .update_status(auth.user_id, booking_id, update_booking_status_model.status)
        .await
    {
        Ok(()) => (StatusCode::OK, "Booking status updated").into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}
