use std::sync::Arc;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::reviews::InsertReviewEntity,
    repositories::{bookings::BookingRepository, reviews::ReviewRepository},
    value_objects::{
        review_eligibility::{self, ReviewEligibility},
        reviews::InsertReviewModel,
    },
};

#[derive(Debug, Error)]
pub enum ReviewSubmissionError {
    #[error("booking not found")]
    BookingNotFound,
    #[error("booking does not belong to this customer")]
    NotCustomerBooking,
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    #[error("booking has already been reviewed")]
    AlreadyReviewed,
    #[error("booking is not approved or completed yet")]
    NotEligibleStatus,
    #[error("invalid schedule data on the booking")]
    InvalidSchedule,
    #[error("review opens at {available_at}")]
    TooEarly { available_at: NaiveDateTime },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ReviewSubmissionError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ReviewSubmissionError::BookingNotFound => StatusCode::NOT_FOUND,
            ReviewSubmissionError::NotCustomerBooking => StatusCode::FORBIDDEN,
            ReviewSubmissionError::InvalidRating => StatusCode::BAD_REQUEST,
            ReviewSubmissionError::AlreadyReviewed
            | ReviewSubmissionError::NotEligibleStatus
            | ReviewSubmissionError::TooEarly { .. } => StatusCode::CONFLICT,
            ReviewSubmissionError::InvalidSchedule => StatusCode::UNPROCESSABLE_ENTITY,
            ReviewSubmissionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, ReviewSubmissionError>;

/// Gates review creation behind the eligibility evaluator, then performs the
/// two writes the original flow does: insert the review, mark the booking
/// reviewed. The writes are independent; there is no cross-document
/// transaction and no uniqueness guarantee beyond the eligibility check.
pub struct ReviewSubmissionUseCase<B, R>
where
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    booking_repository: Arc<B>,
    review_repository: Arc<R>,
}

impl<B, R> ReviewSubmissionUseCase<B, R>
where
    B: BookingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    pub fn new(booking_repository: Arc<B>, review_repository: Arc<R>) -> Self {
        Self {
            booking_repository,
            review_repository,
        }
    }

    /// `now` is the caller's clock reading; the evaluator never consults a
    /// clock itself.
    pub async fn submit(
        &self,
        customer_id: Uuid,
        insert_review_model: InsertReviewModel,
        now: NaiveDateTime,
    ) -> UseCaseResult<Uuid> {
        if !(1..=5).contains(&insert_review_model.rating) {
            return Err(ReviewSubmissionError::InvalidRating);
        }

        let booking = self
            .booking_repository
            .find_by_id(insert_review_model.booking_id)
            .await?
            .ok_or(ReviewSubmissionError::BookingNotFound)?;

        if booking.customer_id != customer_id {
            warn!(
                %customer_id,
                booking_id = %booking.id,
                "review_submission: customer does not own booking"
            );
            return Err(ReviewSubmissionError::NotCustomerBooking);
        }

        match review_eligibility::evaluate(&booking, now) {
            ReviewEligibility::Allowed => {}
            ReviewEligibility::AlreadyReviewed => {
                return Err(ReviewSubmissionError::AlreadyReviewed);
            }
            ReviewEligibility::NotEligibleStatus => {
                return Err(ReviewSubmissionError::NotEligibleStatus);
            }
            ReviewEligibility::InvalidSchedule => {
                warn!(
                    booking_id = %booking.id,
                    slot = booking.selected_time_slot,
                    "review_submission: booking carries malformed schedule data"
                );
                return Err(ReviewSubmissionError::InvalidSchedule);
            }
            ReviewEligibility::TooEarly { available_at } => {
                return Err(ReviewSubmissionError::TooEarly { available_at });
            }
        }

        let review_id = self
            .review_repository
            .add(InsertReviewEntity {
                booking_id: booking.id,
                seller_id: booking.seller_id,
                customer_id,
                rating: insert_review_model.rating,
                comment: insert_review_model.comment,
            })
            .await?;

        self.booking_repository.mark_reviewed(booking.id).await?;

        info!(
            %review_id,
            booking_id = %booking.id,
            seller_id = %booking.seller_id,
            "review_submission: review recorded"
        );

        Ok(review_id)
    }
}
