use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{bookings::BookingModel, time_slots::TimeSlot};

/// Outcome of the review-eligibility check. One closed answer per rule so the
/// HTTP layer can map each to a message without re-deriving anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReviewEligibility {
    Allowed,
    AlreadyReviewed,
    NotEligibleStatus,
    InvalidSchedule,
    TooEarly { available_at: NaiveDateTime },
}

impl ReviewEligibility {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ReviewEligibility::Allowed)
    }
}

/// Rules applied in order: already reviewed, then status, then schedule.
/// A review opens at the end instant of the booked slot; `now == end` counts
/// as open. Both sides are naive local times, no zone conversion.
pub fn evaluate(booking: &BookingModel, now: NaiveDateTime) -> ReviewEligibility {
    if booking.is_reviewed {
        return ReviewEligibility::AlreadyReviewed;
    }

    if !booking.status.is_reviewable() {
        return ReviewEligibility::NotEligibleStatus;
    }

    let Some(slot) = TimeSlot::parse(&booking.selected_time_slot) else {
        return ReviewEligibility::InvalidSchedule;
    };

    let available_at = booking.selected_date.and_time(slot.end);
    if now < available_at {
        return ReviewEligibility::TooEarly { available_at };
    }

    ReviewEligibility::Allowed
}
