use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::entitlements::{EntitlementsUseCase, UseCaseResult},
    domain::{
        entities::products::InsertProductEntity,
        repositories::{
            bookings::BookingRepository, orders::OrderRepository, products::ProductRepository,
            sellers::SellerRepository,
        },
        value_objects::products::{InsertProductModel, ProductModel},
    },
};
use chrono::{DateTime, Utc};

/// Product listings, admission-checked against the seller's plan before every
/// insert. The cached product_count on the seller row is refreshed from the
/// real count after each write.
pub struct ProductCatalogUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    seller_repository: Arc<S>,
    product_repository: Arc<P>,
    entitlements: Arc<EntitlementsUseCase<S, P, O, B>>,
}

impl<S, P, O, B> ProductCatalogUseCase<S, P, O, B>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
{
    pub fn new(
        seller_repository: Arc<S>,
        product_repository: Arc<P>,
        entitlements: Arc<EntitlementsUseCase<S, P, O, B>>,
    ) -> Self {
        Self {
            seller_repository,
            product_repository,
            entitlements,
        }
    }

    pub async fn add(
        &self,
        seller_id: Uuid,
        insert_product_model: InsertProductModel,
        now: DateTime<Utc>,
    ) -> UseCaseResult<Uuid> {
        self.entitlements
            .ensure_can_add_product(seller_id, now)
            .await?;

        let product_id = self
            .product_repository
            .add(InsertProductEntity {
                seller_id,
                name: insert_product_model.name,
                description: insert_product_model.description,
                price_minor: insert_product_model.price_minor,
                is_active: true,
            })
            .await?;

        let count = self.product_repository.count_by_seller(seller_id).await?;
        let cached_count = i32::try_from(count).unwrap_or(i32::MAX);
        self.seller_repository
            .set_product_count(seller_id, cached_count)
            .await?;

        info!(
            %product_id,
            %seller_id,
            product_count = count,
            "product_catalog: product added"
        );

        Ok(product_id)
    }

    pub async fn list_by_seller(&self, seller_id: Uuid) -> UseCaseResult<Vec<ProductModel>> {
        Ok(self.product_repository.list_by_seller(seller_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::usecases::entitlements::EntitlementError,
        domain::{
            repositories::{
                bookings::MockBookingRepository, orders::MockOrderRepository,
                products::MockProductRepository, sellers::MockSellerRepository,
            },
            value_objects::{
                enums::{plan_tiers::PlanTier, seller_modes::SellerMode},
                sellers::SellerModel,
            },
        },
    };
    use mockall::predicate::eq;

    fn sample_seller(id: Uuid, tier: PlanTier) -> SellerModel {
        let now = Utc::now();
        SellerModel {
            id,
            display_name: "Asha".to_string(),
            business_name: "Asha's Kitchen".to_string(),
            mode: SellerMode::Seller,
            tier,
            product_count: 0,
            monthly_earnings_minor: 0,
            created_at: now,
        }
    }

    fn insert_model() -> InsertProductModel {
        InsertProductModel {
            name: "Pickle jar".to_string(),
            description: None,
            price_minor: 25_000,
        }
    }

    #[tokio::test]
    async fn add_refreshes_cached_product_count() {
        let seller_id = Uuid::new_v4();
        let seller = sample_seller(seller_id, PlanTier::Free);

        let mut seller_repo = MockSellerRepository::new();
        let mut product_repo = MockProductRepository::new();
        let mut order_repo = MockOrderRepository::new();
        let booking_repo = MockBookingRepository::new();

        seller_repo.expect_find_by_id().returning(move |_| {
            let seller = seller.clone();
            Box::pin(async move { Ok(seller) })
        });
        // First count feeds the admission check, second refreshes the cache.
        let mut counts = vec![3i64, 4];
        product_repo
            .expect_count_by_seller()
            .times(2)
            .returning(move |_| {
                let count = counts.remove(0);
                Box::pin(async move { Ok(count) })
            });
        order_repo
            .expect_list_by_seller()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        product_repo
            .expect_add()
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));
        seller_repo
            .expect_set_product_count()
            .with(eq(seller_id), eq(4))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let seller_repo = Arc::new(seller_repo);
        let product_repo = Arc::new(product_repo);
        let entitlements = Arc::new(EntitlementsUseCase::new(
            Arc::clone(&seller_repo),
            Arc::clone(&product_repo),
            Arc::new(order_repo),
            Arc::new(booking_repo),
        ));
        let usecase = ProductCatalogUseCase::new(seller_repo, product_repo, entitlements);

        usecase
            .add(seller_id, insert_model(), Utc::now())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn add_is_refused_at_the_free_plan_cap() {
        let seller_id = Uuid::new_v4();
        let seller = sample_seller(seller_id, PlanTier::Free);

        let mut seller_repo = MockSellerRepository::new();
        let mut product_repo = MockProductRepository::new();
        let mut order_repo = MockOrderRepository::new();
        let booking_repo = MockBookingRepository::new();

        seller_repo.expect_find_by_id().returning(move |_| {
            let seller = seller.clone();
            Box::pin(async move { Ok(seller) })
        });
        product_repo
            .expect_count_by_seller()
            .returning(|_| Box::pin(async { Ok(5) }));
        order_repo
            .expect_list_by_seller()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        product_repo.expect_add().never();

        let seller_repo = Arc::new(seller_repo);
        let product_repo = Arc::new(product_repo);
        let entitlements = Arc::new(EntitlementsUseCase::new(
            Arc::clone(&seller_repo),
            Arc::clone(&product_repo),
            Arc::new(order_repo),
            Arc::new(booking_repo),
        ));
        let usecase = ProductCatalogUseCase::new(seller_repo, product_repo, entitlements);

        let result = usecase.add(seller_id, insert_model(), Utc::now()).await;

        assert!(matches!(result, Err(EntitlementError::ProductLimitReached)));
    }

    #[tokio::test]
    async fn oversized_count_is_clamped_before_caching() {
        let seller_id = Uuid::new_v4();
        let seller = sample_seller(seller_id, PlanTier::Premium);

        let mut seller_repo = MockSellerRepository::new();
        let mut product_repo = MockProductRepository::new();
        let mut order_repo = MockOrderRepository::new();
        let booking_repo = MockBookingRepository::new();

        seller_repo.expect_find_by_id().returning(move |_| {
            let seller = seller.clone();
            Box::pin(async move { Ok(seller) })
        });
        let mut counts = vec![3i64, i64::from(i32::MAX) + 10];
        product_repo
            .expect_count_by_seller()
            .times(2)
            .returning(move |_| {
                let count = counts.remove(0);
                Box::pin(async move { Ok(count) })
            });
        order_repo
            .expect_list_by_seller()
            .returning(|_| Box::pin(async { Ok(vec![]) }));
        product_repo
            .expect_add()
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));
        seller_repo
            .expect_set_product_count()
            .with(eq(seller_id), eq(i32::MAX))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let seller_repo = Arc::new(seller_repo);
        let product_repo = Arc::new(product_repo);
        let entitlements = Arc::new(EntitlementsUseCase::new(
            Arc::clone(&seller_repo),
            Arc::clone(&product_repo),
            Arc::new(order_repo),
            Arc::new(booking_repo),
        ));
        let usecase = ProductCatalogUseCase::new(seller_repo, product_repo, entitlements);

        usecase
            .add(seller_id, insert_model(), Utc::now())
            .await
            .unwrap();
    }
}
