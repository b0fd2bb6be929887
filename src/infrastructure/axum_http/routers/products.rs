use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use crate::{
    application::usecases::{
        entitlements::EntitlementsUseCase, product_catalog::ProductCatalogUseCase,
    },
    domain::{
        repositories::{
            bookings::BookingRepository, orders::OrderRepository, products::ProductRepository,
            sellers::SellerRepository,
        },
        value_objects::products::InsertProductModel,
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
                sellers::SellerPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let seller_repository = Arc::new(SellerPostgres::new(Arc::clone(&db_pool)));
    let product_repository = Arc::new(ProductPostgres::new(Arc::clone(&db_pool)));

    let entitlements_usecase = Arc::new(EntitlementsUseCase::new(
        Arc::clone(&seller_repository),
        Arc::clone(&product_repository),
        Arc::new(OrderPostgres::new(Arc::clone(&db_pool))),
        Arc::new(BookingPostgres::new(Arc::clone(&db_pool))),
    ));
    let product_catalog_usecase =
        ProductCatalogUseCase::new(seller_repository, product_repository, entitlements_usecase);

    Router::new()
        .route("/", post(add_product))
        .route("/", get(list_products))
        .with_state(Arc::new(product_catalog_usecase))
}

pub async fn add_product<S, P, O, B>(
    State(product_catalog_usecase): State<Arc<ProductCatalogUseCase<S, P, O, B>>>,
    auth: AuthUser,
    Json(insert_product_model): Json<InsertProductModel>,
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

    match product_catalog_usecase
        .add(auth.user_id, insert_product_model, Utc::now())
        .await
    {
        Ok(product_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": product_id })),
        )
            .into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}

pub async fn list_products<S, P, O, B>(
    State(product_catalog_usecase): State<Arc<ProductCatalogUseCase<S, P, O, B>>>,
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

    match product_catalog_usecase.list_by_seller(auth.user_id).await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_response(e.status_code(), e.to_string()),
    }
}
