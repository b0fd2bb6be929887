use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lifecycle of a product order. The store column is plain text, so reads go
/// through `from` (unknown values collapse to Pending) and writes are only
/// accepted when `can_transition_to` allows them.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Preparing,
    Ready,
    Completed,
    Declined,
}

impl OrderStatus {
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Declined)
                | (OrderStatus::Accepted, OrderStatus::Preparing)
                | (OrderStatus::Preparing, OrderStatus::Ready)
                | (OrderStatus::Ready, OrderStatus::Completed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Declined)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order_status = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Declined => "declined",
        };
        write!(f, "{}", order_status)
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "accepted" => OrderStatus::Accepted,
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "completed" => OrderStatus::Completed,
            "declined" => OrderStatus::Declined,
            _ => OrderStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions_are_allowed() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Accepted));
        assert!(OrderStatus::Accepted.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Declined));
    }

    #[test]
    fn skipping_stages_is_rejected() {
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Accepted.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Declined.can_transition_to(OrderStatus::Accepted));
    }

    #[test]
    fn unknown_status_reads_as_pending() {
        assert_eq!(OrderStatus::from("shipped"), OrderStatus::Pending);
    }
}
