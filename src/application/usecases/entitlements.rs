use std::sync::Arc;

use anyhow::Result as AnyResult;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::{
        bookings::BookingRepository, orders::OrderRepository, products::ProductRepository,
        sellers::SellerRepository,
    },
    value_objects::{
        earnings::{EarningRecord, monthly_earnings_minor},
        entitlements::{self, EarningsStatus, SellerUsage},
        enums::dashboard_tabs::DashboardTab,
        sellers::SellerModel,
    },
};

#[derive(Debug, Error)]
pub enum EntitlementError {
    #[error("product limit reached for the current plan")]
    ProductLimitReached,
    #[error("monthly earnings limit reached for the current plan")]
    EarningsLimitReached,
    #[error("the {0} tab is not available on the current plan")]
    TabNotAvailable(DashboardTab),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EntitlementError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            EntitlementError::ProductLimitReached
            | EntitlementError::EarningsLimitReached
            | EntitlementError::TabNotAvailable(_) => StatusCode::FORBIDDEN,
            EntitlementError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, EntitlementError>;

/// Answers plan-gating questions from fresh snapshots. Product counts and
/// monthly earnings are recomputed from their source collections on every
/// call; the counters cached on the seller row are display-only.
pub struct EntitlementsUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    seller_repository: Arc<S>,
    product_repository: Arc<P>,
    order_repository: Arc<O>,
    booking_repository: Arc<B>,
}

impl<S, P, O, B> EntitlementsUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(
        seller_repository: Arc<S>,
        product_repository: Arc<P>,
        order_repository: Arc<O>,
        booking_repository: Arc<B>,
    ) -> Self {
        Self {
            seller_repository,
            product_repository,
            order_repository,
            booking_repository,
        }
    }

    pub async fn seller(&self, seller_id: Uuid) -> UseCaseResult<SellerModel> {
        Ok(self.seller_repository.find_by_id(seller_id).await?)
    }

    /// Resolves the seller's current usage. `now` is supplied by the caller
    /// so the computation itself stays clock-free.
    pub async fn usage_snapshot(
        &self,
        seller_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<SellerUsage> {
        let seller = self.seller_repository.find_by_id(seller_id).await?;

        let product_count = self.product_repository.count_by_seller(seller_id).await?;
        let earnings_minor = self.current_month_earnings(&seller, now).await?;

        debug!(
            %seller_id,
            tier = %seller.tier,
            product_count,
            earnings_minor,
            "entitlements: usage snapshot resolved"
        );

        Ok(SellerUsage::new(seller.tier, product_count, earnings_minor))
    }

    pub async fn ensure_can_add_product(
        &self,
        seller_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<()> {
        let usage = self.usage_snapshot(seller_id, now).await?;

        if !entitlements::can_add_product(&usage) {
            warn!(
                %seller_id,
                product_count = usage.product_count,
                "entitlements: product limit reached"
            );
            return Err(EntitlementError::ProductLimitReached);
        }

        Ok(())
    }

    pub async fn earnings_status(
        &self,
        seller_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<EarningsStatus> {
        let usage = self.usage_snapshot(seller_id, now).await?;
        Ok(entitlements::earnings_status(&usage))
    }

    pub async fn visible_tabs(
        &self,
        seller_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<Vec<DashboardTab>> {
        let usage = self.usage_snapshot(seller_id, now).await?;
        Ok(entitlements::visible_tabs(&usage))
    }

    pub async fn ensure_tab_visible(
        &self,
        seller_id: Uuid,
        tab: DashboardTab,
        now: DateTime<Utc>,
    ) -> UseCaseResult<()> {
        let tabs = self.visible_tabs(seller_id, now).await?;
        if !tabs.contains(&tab) {
            warn!(%seller_id, tab = %tab, "entitlements: tab not available on plan");
            return Err(EntitlementError::TabNotAvailable(tab));
        }
        Ok(())
    }

    /// Ground-truth earnings for the seller's current calendar month,
    /// aggregated from the collection matching the seller's mode.
    pub async fn current_month_earnings(
        &self,
        seller: &SellerModel,
        now: DateTime<Utc>,
    ) -> AnyResult<i64> {
        let records: Vec<EarningRecord> = if seller.mode.is_service_mode() {
            self.booking_repository
                .list_by_seller(seller.id)
                .await?
                .iter()
                .map(EarningRecord::from)
                .collect()
        } else {
            self.order_repository
                .list_by_seller(seller.id)
                .await?
                .iter()
                .map(EarningRecord::from)
                .collect()
        };

        Ok(monthly_earnings_minor(
            &records,
            seller.mode.terminal_status(),
            now,
        ))
    }
}
