use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::domain::repositories::{
    bookings::BookingRepository, chats::ChatRepository, orders::OrderRepository,
    products::ProductRepository, reviews::ReviewRepository, sellers::SellerRepository,
};

/// Rows removed per collection during one deletion run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DeletionReport {
    pub products: usize,
    pub orders: usize,
    pub bookings: usize,
    pub chats: usize,
    pub reviews: usize,
    pub account_rows: usize,
}

/// Cascading account deletion as an ordered sequence of idempotent steps.
/// There is no cross-collection transaction; instead every step deletes by
/// owner id (a no-op when already done), so a run that failed partway is
/// resumed by running the whole sequence again. The account row goes last so
/// a surviving row always means "deletion incomplete, re-run".
pub struct AccountDeletionUseCase<S, P, O, B, R, C>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    C: ChatRepository + Send + Sync + 'static,
{
    seller_repository: Arc<S>,
    product_repository: Arc<P>,
    order_repository: Arc<O>,
    booking_repository: Arc<B>,
    review_repository: Arc<R>,
    chat_repository: Arc<C>,
}

impl<S, P, O, B, R, C> AccountDeletionUseCase<S, P, O, B, R, C>
where
    S: SellerRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
    O: OrderRepository + Send + Sync + 'static,
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
    C: ChatRepository + Send + Sync + 'static,
{
    pub fn new(
        seller_repository: Arc<S>,
        product_repository: Arc<P>,
        order_repository: Arc<O>,
        booking_repository: Arc<B>,
        review_repository: Arc<R>,
        chat_repository: Arc<C>,
    ) -> Self {
        Self {
            seller_repository,
            product_repository,
            order_repository,
            booking_repository,
            review_repository,
            chat_repository,
        }
    }

    pub async fn delete_seller_account(&self, seller_id: Uuid) -> Result<DeletionReport> {
        info!(%seller_id, "account_deletion: starting seller deletion");

        let mut report = DeletionReport::default();

        report.products = self.product_repository.delete_by_seller(seller_id).await?;
        info!(%seller_id, rows = report.products, "account_deletion: products step done");

        report.bookings = self.booking_repository.delete_by_seller(seller_id).await?;
        info!(%seller_id, rows = report.bookings, "account_deletion: bookings step done");

        report.orders = self.order_repository.delete_by_seller(seller_id).await?;
        info!(%seller_id, rows = report.orders, "account_deletion: orders step done");

        report.chats = self
            .chat_repository
            .delete_by_participant(seller_id)
            .await?;
        info!(%seller_id, rows = report.chats, "account_deletion: chats step done");

        report.reviews = self.review_repository.delete_by_seller(seller_id).await?;
        info!(%seller_id, rows = report.reviews, "account_deletion: reviews step done");

        report.account_rows = self.seller_repository.delete(seller_id).await?;
        info!(%seller_id, "account_deletion: seller deletion complete");

        Ok(report)
    }

    pub async fn delete_customer_account(&self, customer_id: Uuid) -> Result<DeletionReport> {
        info!(%customer_id, "account_deletion: starting customer deletion");

        let mut report = DeletionReport::default();

        report.orders = self.order_repository.delete_by_customer(customer_id).await?;
        info!(%customer_id, rows = report.orders, "account_deletion: orders step done");

        report.bookings = self
            .booking_repository
            .delete_by_customer(customer_id)
            .await?;
        info!(%customer_id, rows = report.bookings, "account_deletion: bookings step done");

        report.chats = self
            .chat_repository
            .delete_by_participant(customer_id)
            .await?;
        info!(%customer_id, rows = report.chats, "account_deletion: chats step done");

        report.reviews = self
            .review_repository
            .delete_by_customer(customer_id)
            .await?;
        info!(%customer_id, rows = report.reviews, "account_deletion: reviews step done");

        info!(%customer_id, "account_deletion: customer deletion complete");

        Ok(report)
    }
}
