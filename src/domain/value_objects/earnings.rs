use chrono::{DateTime, Datelike, Utc};

use crate::domain::value_objects::{bookings::BookingModel, orders::OrderModel};

/// A single earning-bearing record, flattened from either an order or a
/// booking so the aggregator does not care which collection it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningRecord {
    /// Raw status string as stored; the caller names which value is terminal.
    pub status: String,
    pub amount_minor: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

impl From<&OrderModel> for EarningRecord {
    fn from(order: &OrderModel) -> Self {
        EarningRecord {
            status: order.status.to_string(),
            amount_minor: Some(order.total_amount_minor),
            occurred_at: order.created_at,
        }
    }
}

impl From<&BookingModel> for EarningRecord {
    fn from(booking: &BookingModel) -> Self {
        EarningRecord {
            status: booking.status.to_string(),
            amount_minor: Some(booking.service_fee_minor),
            occurred_at: booking.created_at,
        }
    }
}

/// Sums the amounts of records that are terminal (status equals
/// `terminal_status`) and fall in the same calendar month and year as
/// `reference`. Missing or negative amounts count as zero.
pub fn monthly_earnings_minor(
    records: &[EarningRecord],
    terminal_status: &str,
    reference: DateTime<Utc>,
) -> i64 {
    records
        .iter()
        .filter(|record| record.status == terminal_status)
        .filter(|record| {
            record.occurred_at.month() == reference.month()
                && record.occurred_at.year() == reference.year()
        })
        .map(|record| record.amount_minor.unwrap_or(0).max(0))
        .sum()
}
