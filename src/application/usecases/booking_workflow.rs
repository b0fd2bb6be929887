use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::bookings::InsertBookingEntity,
    repositories::{bookings::BookingRepository, sellers::SellerRepository},
    value_objects::{
        bookings::{BookingModel, InsertBookingModel},
        enums::booking_statuses::BookingStatus,
        time_slots::TimeSlot,
    },
};

#[derive(Debug, Error)]
pub enum BookingWorkflowError {
    #[error("booking not found")]
    BookingNotFound,
    #[error("booking does not belong to this seller")]
    NotSellerBooking,
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
    #[error("time slot must be \"HH:MM - HH:MM\" with the end after the start")]
    InvalidTimeSlot,
    #[error("service fee must be positive")]
    InvalidFee,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BookingWorkflowError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            BookingWorkflowError::BookingNotFound => StatusCode::NOT_FOUND,
            BookingWorkflowError::NotSellerBooking => StatusCode::FORBIDDEN,
            BookingWorkflowError::InvalidTransition { .. }
            | BookingWorkflowError::InvalidTimeSlot
            | BookingWorkflowError::InvalidFee => StatusCode::BAD_REQUEST,
            BookingWorkflowError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, BookingWorkflowError>;

/// Single write boundary for booking statuses, mirroring the order workflow.
/// Approved is the terminal status that counts toward service earnings.
pub struct BookingWorkflowUseCase<B, S>
where
    B: BookingRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    booking_repository: Arc<B>,
    seller_repository: Arc<S>,
}

impl<B, S> BookingWorkflowUseCase<B, S>
where
    B: BookingRepository + Send + Sync + 'static,
    S: SellerRepository + Send + Sync + 'static,
{
    pub fn new(booking_repository: Arc<B>, seller_repository: Arc<S>) -> Self {
        Self {
            booking_repository,
            seller_repository,
        }
    }

    pub async fn place(
        &self,
        customer_id: Uuid,
        insert_booking_model: InsertBookingModel,
    ) -> UseCaseResult<Uuid> {
        if insert_booking_model.service_fee_minor <= 0 {
            return Err(BookingWorkflowError::InvalidFee);
        }

        let slot = TimeSlot::parse(&insert_booking_model.selected_time_slot)
            .ok_or(BookingWorkflowError::InvalidTimeSlot)?;
        if !slot.is_ordered() {
            return Err(BookingWorkflowError::InvalidTimeSlot);
        }

        let booking_id = self
            .booking_repository
            .place(InsertBookingEntity {
                seller_id: insert_booking_model.seller_id,
                customer_id,
                service_name: insert_booking_model.service_name,
                status: BookingStatus::Pending.to_string(),
                service_fee_minor: insert_booking_model.service_fee_minor,
                selected_date: insert_booking_model.selected_date,
                selected_time_slot: slot.to_string(),
                location: insert_booking_model.location,
                is_reviewed: false,
            })
            .await?;

        info!(
            %booking_id,
            seller_id = %insert_booking_model.seller_id,
            %customer_id,
            "booking_workflow: booking placed"
        );

        Ok(booking_id)
    }

    pub async fn update_status(
        &self,
        seller_id: Uuid,
        booking_id: Uuid,
        next: BookingStatus,
    ) -> UseCaseResult<()> {
        let booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingWorkflowError::BookingNotFound)?;

        if booking.seller_id != seller_id {
            warn!(%seller_id, %booking_id, "booking_workflow: seller does not own booking");
            return Err(BookingWorkflowError::NotSellerBooking);
        }

        if !booking.status.can_transition_to(next) {
            warn!(
                %booking_id,
                from = %booking.status,
                to = %next,
                "booking_workflow: rejected status transition"
            );
            return Err(BookingWorkflowError::InvalidTransition {
                from: booking.status,
                to: next,
            });
        }

        self.booking_repository
            .update_status(booking_id, next)
            .await?;
        info!(%booking_id, from = %booking.status, to = %next, "booking_workflow: status updated");

        if next == BookingStatus::Approved {
            self.roll_into_earnings(&booking).await?;
        }

        Ok(())
    }

    pub async fn list_by_seller(&self, seller_id: Uuid) -> UseCaseResult<Vec<BookingModel>> {
        Ok(self.booking_repository.list_by_seller(seller_id).await?)
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> UseCaseResult<Vec<BookingModel>> {
        Ok(self.booking_repository.list_by_customer(customer_id).await?)
    }

    async fn roll_into_earnings(&self, booking: &BookingModel) -> UseCaseResult<()> {
        let seller = self
            .seller_repository
            .find_by_id(booking.seller_id)
            .await?;
        let updated = seller.monthly_earnings_minor + booking.service_fee_minor.max(0);

        self.seller_repository
            .set_monthly_earnings(booking.seller_id, updated)
            .await?;

        info!(
            seller_id = %booking.seller_id,
            earnings_minor = updated,
            "booking_workflow: cached earnings counter updated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{
        bookings::MockBookingRepository, sellers::MockSellerRepository,
    };
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;

    fn sample_booking(seller_id: Uuid, status: BookingStatus) -> BookingModel {
        BookingModel {
            id: Uuid::new_v4(),
            seller_id,
            customer_id: Uuid::new_v4(),
            service_name: "Mehendi".to_string(),
            status,
            service_fee_minor: 60_000,
            selected_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            selected_time_slot: "09:00 - 10:00".to_string(),
            location: None,
            is_reviewed: false,
            created_at: Utc::now(),
        }
    }

    fn insert_model(seller_id: Uuid, slot: &str, fee_minor: i64) -> InsertBookingModel {
        InsertBookingModel {
            seller_id,
            service_name: "Mehendi".to_string(),
            service_fee_minor: fee_minor,
            selected_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            selected_time_slot: slot.to_string(),
            location: None,
        }
    }

    #[tokio::test]
    async fn placing_with_malformed_slot_is_rejected() {
        let booking_repo = MockBookingRepository::new();
        let seller_repo = MockSellerRepository::new();
        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        let result = usecase
            .place(Uuid::new_v4(), insert_model(Uuid::new_v4(), "morning", 60_000))
            .await;
        assert!(matches!(result, Err(BookingWorkflowError::InvalidTimeSlot)));

        let result = usecase
            .place(
                Uuid::new_v4(),
                insert_model(Uuid::new_v4(), "14:00 - 13:00", 60_000),
            )
            .await;
        assert!(matches!(result, Err(BookingWorkflowError::InvalidTimeSlot)));
    }

    #[tokio::test]
    async fn placing_a_valid_booking_starts_pending_and_unreviewed() {
        let seller_id = Uuid::new_v4();
        let mut booking_repo = MockBookingRepository::new();
        let seller_repo = MockSellerRepository::new();

        booking_repo
            .expect_place()
            .withf(|entity: &InsertBookingEntity| {
                entity.status == "pending" && !entity.is_reviewed
            })
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));

        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        usecase
            .place(Uuid::new_v4(), insert_model(seller_id, "09:00 - 10:00", 60_000))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn approving_a_booking_rolls_fee_into_counter() {
        let seller_id = Uuid::new_v4();
        let booking = sample_booking(seller_id, BookingStatus::Pending);
        let booking_id = booking.id;

        let mut booking_repo = MockBookingRepository::new();
        let mut seller_repo = MockSellerRepository::new();

        booking_repo.expect_find_by_id().returning(move |_| {
            let booking = booking.clone();
            Box::pin(async move { Ok(Some(booking)) })
        });
        booking_repo
            .expect_update_status()
            .with(eq(booking_id), eq(BookingStatus::Approved))
            .returning(|_, _| Box::pin(async { Ok(()) }));
        seller_repo.expect_find_by_id().returning(move |id| {
            use crate::domain::value_objects::{
                enums::{plan_tiers::PlanTier, seller_modes::SellerMode},
                sellers::SellerModel,
            };
            let now = Utc::now();
            let seller = SellerModel {
                id,
                display_name: "Asha".to_string(),
                business_name: "Asha Services".to_string(),
                mode: SellerMode::Service,
                tier: PlanTier::Free,
                product_count: 1,
                monthly_earnings_minor: 10_000,
                created_at: now,
            };
            Box::pin(async move { Ok(seller) })
        });
        seller_repo
            .expect_set_monthly_earnings()
            .with(eq(seller_id), eq(70_000i64))
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        usecase
            .update_status(seller_id, booking_id, BookingStatus::Approved)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn declined_booking_cannot_be_approved_later() {
        let seller_id = Uuid::new_v4();
        let booking = sample_booking(seller_id, BookingStatus::Declined);
        let booking_id = booking.id;

        let mut booking_repo = MockBookingRepository::new();
        let seller_repo = MockSellerRepository::new();

        booking_repo.expect_find_by_id().returning(move |_| {
            let booking = booking.clone();
            Box::pin(async move { Ok(Some(booking)) })
        });

        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        let result = usecase
            .update_status(seller_id, booking_id, BookingStatus::Approved)
            .await;

        assert!(matches!(
            result,
            Err(BookingWorkflowError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn missing_booking_maps_to_not_found() {
        let mut booking_repo = MockBookingRepository::new();
        let seller_repo = MockSellerRepository::new();

        booking_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        let result = usecase
            .update_status(Uuid::new_v4(), Uuid::new_v4(), BookingStatus::Approved)
            .await;

        assert!(matches!(result, Err(BookingWorkflowError::BookingNotFound)));
    }

    #[tokio::test]
    async fn lookup_failure_surfaces_as_internal_not_as_missing_booking() {
        let mut booking_repo = MockBookingRepository::new();
        let seller_repo = MockSellerRepository::new();

        booking_repo.expect_find_by_id().returning(|_| {
            Box::pin(async { Err(anyhow::anyhow!("connection reset by peer")) })
        });

        let usecase = BookingWorkflowUseCase::new(Arc::new(booking_repo), Arc::new(seller_repo));

        let error = usecase
            .update_status(Uuid::new_v4(), Uuid::new_v4(), BookingStatus::Approved)
            .await
            .unwrap_err();

        assert!(matches!(error, BookingWorkflowError::Internal(_)));
        assert_eq!(
            error.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
