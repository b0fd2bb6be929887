use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::entitlements::{EntitlementsUseCase, UseCaseResult},
    domain::{
        entities::sellers::InsertSellerEntity,
        repositories::{
            bookings::BookingRepository, orders::OrderRepository, products::ProductRepository,
            sellers::SellerRepository,
        },
        value_objects::{
            entitlements,
            enums::plan_tiers::PlanTier,
            plans::Plan,
            sellers::{InsertSellerModel, SellerDashboardDto},
        },
    },
};

/// Onboarding, plan upgrades and the dashboard read side. Gating answers are
/// delegated to the entitlements usecase so they come from one place.
pub struct SellerAccountUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    seller_repository: Arc<S>,
    entitlements: Arc<EntitlementsUseCase<S, P, O, B>>,
}

impl<S, P, O, B> SellerAccountUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(
        seller_repository: Arc<S>,
        entitlements: Arc<EntitlementsUseCase<S, P, O, B>>,
    ) -> Self {
        Self {
            seller_repository,
            entitlements,
        }
    }

    /// Creates the seller row with zeroed counters and the chosen tier.
    /// `seller_id` is the authenticated user's id so the row and the token
    /// agree.
    pub async fn onboard(
        &self,
        seller_id: Uuid,
        insert_seller_model: InsertSellerModel,
    ) -> Result<Uuid> {
        let seller_id = self
            .seller_repository
            .register(InsertSellerEntity {
                id: seller_id,
                display_name: insert_seller_model.display_name,
                business_name: insert_seller_model.business_name,
                mode: insert_seller_model.mode.to_string(),
                subscription_plan: insert_seller_model.tier.to_string(),
                product_count: 0,
                monthly_earnings_minor: 0,
            })
            .await?;

        info!(
            %seller_id,
            tier = %insert_seller_model.tier,
            mode = %insert_seller_model.mode,
            "seller_account: seller onboarded"
        );

        Ok(seller_id)
    }

    pub async fn upgrade_to_premium(&self, seller_id: Uuid) -> Result<()> {
        self.seller_repository
            .set_tier(seller_id, PlanTier::Premium)
            .await?;

        info!(%seller_id, "seller_account: upgraded to premium");
        Ok(())
    }

    pub async fn dashboard(
        &self,
        seller_id: Uuid,
        now: DateTime<Utc>,
    ) -> UseCaseResult<SellerDashboardDto> {
        let seller = self.entitlements.seller(seller_id).await?;
        let usage = self.entitlements.usage_snapshot(seller_id, now).await?;

        let tabs = entitlements::visible_tabs(&usage);
        let earnings_status = entitlements::earnings_status(&usage);
        let limit = Plan::for_tier(usage.tier).monthly_earnings_limit_minor;

        Ok(SellerDashboardDto {
            seller,
            usage,
            tabs,
            earnings_status,
            monthly_earnings_limit_minor: limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        repositories::{
            bookings::MockBookingRepository, orders::MockOrderRepository,
            products::MockProductRepository, sellers::MockSellerRepository,
        },
        value_objects::{
            entitlements::EarningsStatus,
            enums::{dashboard_tabs::DashboardTab, seller_modes::SellerMode},
            sellers::SellerModel,
        },
    };
    use chrono::TimeZone;

    #[tokio::test]
    async fn onboarding_zeroes_counters_and_keeps_chosen_tier() {
        let mut seller_repo = MockSellerRepository::new();
        seller_repo
            .expect_register()
            .withf(|entity: &InsertSellerEntity| {
                entity.product_count == 0
                    && entity.monthly_earnings_minor == 0
                    && entity.subscription_plan == "premium"
            })
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));

        let seller_repo = Arc::new(seller_repo);
        let entitlements = Arc::new(EntitlementsUseCase::new(
            Arc::clone(&seller_repo),
            Arc::new(MockProductRepository::new()),
            Arc::new(MockOrderRepository::new()),
            Arc::new(MockBookingRepository::new()),
        ));
        let usecase = SellerAccountUseCase::new(seller_repo, entitlements);

        usecase
            .onboard(
                Uuid::new_v4(),
                InsertSellerModel {
                    display_name: "Asha".to_string(),
                    business_name: "Asha's Kitchen".to_string(),
                    mode: SellerMode::Seller,
                    tier: PlanTier::Premium,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dashboard_composes_tabs_status_and_limit() {
        let seller_id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

        let mut seller_repo = MockSellerRepository::new();
        let mut product_repo = MockProductRepository::new();
        let mut order_repo = MockOrderRepository::new();

        seller_repo.expect_find_by_id().returning(move |id| {
            let seller = SellerModel {
                id,
                display_name: "Asha".to_string(),
                business_name: "Asha's Kitchen".to_string(),
                mode: SellerMode::Seller,
                tier: PlanTier::Free,
                product_count: 1,
                monthly_earnings_minor: 0,
                created_at: Utc::now(),
            };
            Box::pin(async move { Ok(seller) })
        });
        product_repo
            .expect_count_by_seller()
            .returning(|_| Box::pin(async { Ok(1) }));
        order_repo
            .expect_list_by_seller()
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let seller_repo = Arc::new(seller_repo);
        let entitlements = Arc::new(EntitlementsUseCase::new(
            Arc::clone(&seller_repo),
            Arc::new(product_repo),
            Arc::new(order_repo),
            Arc::new(MockBookingRepository::new()),
        ));
        let usecase = SellerAccountUseCase::new(seller_repo, entitlements);

        let dashboard = usecase.dashboard(seller_id, now).await.unwrap();
        assert_eq!(
            dashboard.tabs,
            vec![DashboardTab::Products, DashboardTab::Orders]
        );
        assert_eq!(dashboard.earnings_status, EarningsStatus::Ok);
        assert_eq!(dashboard.monthly_earnings_limit_minor, Some(1_000_000));
    }
}
