use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    repositories::{
        bookings::BookingRepository, orders::OrderRepository, sellers::SellerRepository,
    },
    value_objects::earnings::{EarningRecord, monthly_earnings_minor},
};

/// Recomputes a seller's monthly earnings from the source collection and
/// overwrites the cached counter with the result. The aggregator is the
/// ground truth; the counter only exists for the dashboard fast path.
pub struct EarningsReconciliationUseCase<S, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    seller_repository: Arc<S>,
    order_repository: Arc<O>,
    booking_repository: Arc<B>,
}

impl<S, O, B> EarningsReconciliationUseCase<S, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(
        seller_repository: Arc<S>,
        order_repository: Arc<O>,
        booking_repository: Arc<B>,
    ) -> Self {
        Self {
            seller_repository,
            order_repository,
            booking_repository,
        }
    }

    pub async fn reconcile(&self, seller_id: Uuid, now: DateTime<Utc>) -> Result<i64> {
        let seller = self.seller_repository.find_by_id(seller_id).await?;

        let records: Vec<EarningRecord> = if seller.mode.is_service_mode() {
            self.booking_repository
                .list_by_seller(seller_id)
                .await?
                .iter()
                .map(EarningRecord::from)
                .collect()
        } else {
            self.order_repository
                .list_by_seller(seller_id)
                .await?
                .iter()
                .map(EarningRecord::from)
                .collect()
        };

        let computed = monthly_earnings_minor(&records, seller.mode.terminal_status(), now);

        if computed != seller.monthly_earnings_minor {
            warn!(
                %seller_id,
                cached = seller.monthly_earnings_minor,
                computed,
                "earnings_reconciliation: cached counter drifted"
            );
        }

        self.seller_repository
            .set_monthly_earnings(seller_id, computed)
            .await?;

        info!(%seller_id, earnings_minor = computed, "earnings_reconciliation: counter rewritten");

        Ok(computed)
    }
}
