use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::Utc;

use crate::{
    application::usecases::{
        account_deletion::AccountDeletionUseCase,
        earnings_reconciliation::EarningsReconciliationUseCase, entitlements::EntitlementsUseCase,
        seller_account::SellerAccountUseCase,
    },
    domain::{
        repositories::{
            bookings::BookingRepository, chats::ChatRepository, orders::OrderRepository,
            products::ProductRepository, reviews::ReviewRepository, sellers::SellerRepository,
        },
        value_objects::sellers::InsertSellerModel,
    },
    infrastructure::{
        axum_http::{
            auth::AuthUser,
            error_responses::{AppError, error_response},
        },
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bookings::BookingPostgres, chats::ChatPostgres, orders::OrderPostgres,
                products::ProductPostgres, reviews::ReviewPostgres, sellers::SellerPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let seller_repository = Arc::new(SellerPostgres::new(Arc::clone(&db_pool)));
    let product_repository = Arc::new(ProductPostgres::new(Arc::clone(&db_pool)));
    let order_repository = Arc::new(OrderPostgres::new(Arc::clone(&db_pool)));
    let booking_repository = Arc::new(BookingPostgres::new(Arc::clone(&db_pool)));

    let entitlements_usecase = Arc::new(EntitlementsUseCase::new(
        Arc::clone(&seller_repository),
        Arc::clone(&product_repository),
        Arc::clone(&order_repository),
        Arc::clone(&booking_repository),
    ));
    let seller_account_usecase = SellerAccountUseCase::new(
        Arc::clone(&seller_repository),
        Arc::clone(&entitlements_usecase),
    );
    let reconciliation_usecase = EarningsReconciliationUseCase::new(
        Arc::clone(&seller_repository),
        Arc::clone(&order_repository),
        Arc::clone(&booking_repository),
    );
    let deletion_usecase = AccountDeletionUseCase::new(
        seller_repository,
        product_repository,
        order_repository,
        booking_repository,
        Arc::new(ReviewPostgres::new(Arc::clone(&db_pool))),
        Arc::new(ChatPostgres::new(Arc::clone(&db_pool))),
    );

    Router::new()
        .route("/onboard", post(onboard))
        .route("/upgrade", post(upgrade))
        .route("/dashboard", get(dashboard))
        .with_state(Arc::new(seller_account_usecase))
        .merge(
            Router::new()
                .route("/earnings/reconcile", post(reconcile_earnings))
                .with_state(Arc::new(reconciliation_usecase)),
        )
        .merge(
            Router::new()
                .route("/account", delete(delete_account))
                .with_state(Arc::new(deletion_usecase)),
        )
}

pub async fn onboard<S, P, O, B>(
    State(seller_account_usecase): State<Arc<SellerAccountUseCase<S, P, O, B>>>,
    auth: AuthUser,
    Json(insert_seller_model): Json<InsertSellerModel>,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    match seller_account_usecase
        .onboard(auth.user_id, insert_seller_model)
        .await
    {
        Ok(seller_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": seller_id })),
        )
            .into_response(),
        Err(e) => AppError::Internal(e).into_response(),
    }
}

pub async fn upgrade<S, P, O, B>(
    State(seller_account_usecase): State<Arc<SellerAccountUseCase<S, P, O, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    match seller_account_usecase.upgrade_to_premium(auth.user_id).await {
        Ok(()) => (StatusCode::OK, "Upgraded to premium").into_response(),
        Err(e) => AppError::Internal(e).into_response(),
    }
}

pub async fn dashboard<S, P, O, B>(
    State(seller_account_usecase): State<Arc<SellerAccountUseCase<S, P, O, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    match seller_account_usecase
        .dashboard(auth.user_id, Utc::now())
        .await
    {
        Ok(dashboard_dto) => (StatusCode::OK, Json(dashboard_dto)).into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

pub async fn reconcile_earnings<S, O, B>(
    State(reconciliation_usecase): State<Arc<EarningsReconciliationUseCase<S, O, B>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    if !auth.is_seller() {
        return AppError::Forbidden("seller account required".to_string()).into_response();
    }

    match reconciliation_usecase
        .reconcile(auth.user_id, Utc::now())
        .await
    {
        Ok(earnings_minor) => (
            StatusCode::OK,
            Json(serde_json::json!({ "monthly_earnings_minor": earnings_minor })),
        )
            .into_response(),
        Err(e) => AppError::Internal(e).into_response(),
    }
}

pub async fn delete_account<S, P, O, B, R, C>(
    State(deletion_usecase): State<Arc<AccountDeletionUseCase<S, P, O, B, R, C>>>,
    auth: AuthUser,
) -> impl IntoResponse
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    C: ChatRepository + Send + Sync + 'static,
{
    let result = if auth.is_seller() {
        deletion_usecase.delete_seller_account(auth.user_id).await
    } else {
        deletion_usecase.delete_customer_account(auth.user_id).await
    };

    match result {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => AppError::Internal(e).into_response(),
    }
}
