use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle of a service booking. Declined and Busy are terminal alternates
/// a seller can pick instead of approving.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Declined,
    Busy,
}

impl BookingStatus {
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Declined)
                | (BookingStatus::Pending, BookingStatus::Busy)
                | (BookingStatus::Approved, BookingStatus::Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed | BookingStatus::Declined | BookingStatus::Busy
        )
    }

    /// Statuses after which a customer may review the booking.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Completed)
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let booking_status = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Completed => "completed",
            BookingStatus::Declined => "declined",
            BookingStatus::Busy => "busy",
        };
        write!(f, "{}", booking_status)
    }
}

impl From<&str> for BookingStatus {
    fn from(value: &str) -> Self {
        match value {
            "approved" => BookingStatus::Approved,
            "completed" => BookingStatus::Completed,
            "declined" => BookingStatus::Declined,
            "busy" => BookingStatus::Busy,
            _ => BookingStatus::Pending,
        }
    }
}
