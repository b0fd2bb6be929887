use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, Utc};

use crate::{
    application::usecases::{
        entitlements::EntitlementsUseCase, review_submission::ReviewSubmissionUseCase,
    },
    domain::{
        repositories::{
            bookings::BookingRepository, orders::OrderRepository, products::ProductRepository,
            reviews::ReviewRepository, sellers::SellerRepository,
        },
        value_objects::{enums::dashboard_tabs::DashboardTab, reviews::InsertReviewModel},
    },
    infrastructure::{
        axum_http::{
            auth::AuthUser,
            error_responses::{AppError, error_response},
        },
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bookings::BookingPostgres, orders::OrderPostgres, products::ProductPostgres,
                reviews::ReviewPostgres, sellers::SellerPostgres,
            },
        },
    },
};

/// The review feed belongs to the premium Reviews tab, so listing goes
/// through the entitlement check first.
pub struct ReviewFeedState<S, P, O, B, R>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    entitlements: Arc<EntitlementsUseCase<S, P, O, B>>,
    review_repository: Arc<R>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let booking_repository = Arc::new(BookingPostgres::new(Arc::clone(&db_pool)));
    let review_repository = Arc::new(ReviewPostgres::new(Arc::clone(&db_pool)));

    let review_submission_usecase = ReviewSubmissionUseCase::new(
        Arc::clone(&booking_repository),
        Arc::clone(&review_repository),
    );
    let entitlements_usecase = Arc::new(EntitlementsUseCase::new(
        Arc::new(SellerPostgres::new(Arc::clone(&db_pool))),
        Arc::new(ProductPostgres::new(Arc::clone(&db_pool))),
        Arc::new(OrderPostgres::new(Arc::clone(&db_pool))),
        booking_repository,
    ));

    Router::new()
        .route("/", post(submit_review))
        .with_state(Arc::new(review_submission_usecase))
        .merge(
            Router::new().route("/", get(list_reviews)).with_state(Arc::new(ReviewFeedState {
                entitlements: entitlements_usecase,
                review_repository,
            })),
        )
}

pub async fn submit_review<B, R>(
    State(review_submission_usecase): State<Arc<ReviewSubmissionUseCase<B, R>>>,
    auth: AuthUser,
    Json(insert_review_model): Json<InsertReviewModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    if !auth.is_customer() {
        return AppError::Forbidden("customer account required".to_string()).into_response();
    }

    // The eligibility window compares naive local times, matching how the
    // slot strings were entered.
    let now = Local::now().naive_local();

    match review_submission_usecase
        .submit(auth.user_id, insert_review_model, now)
        .await
    {
        Ok(review_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": review_id })),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

pub async fn list_reviews<S, P, O, B, R>(
    State(state): State<Arc<ReviewFeedState<S, P, O, B, R>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    if let Err(e) = state
        .entitlements
        .ensure_tab_visible(auth.user_id, DashboardTab::Reviews, Utc::now())
        .await
    {
        return error_response(e.status_code(), e.to_string());
    }

    match state.review_repository.list_by_seller(auth.user_id).await {
        Ok(reviews) => (StatusCode::OK, Json(reviews)).into_response(),
        Err(e) => AppError::Internal(e).into_response(),
    }
}
