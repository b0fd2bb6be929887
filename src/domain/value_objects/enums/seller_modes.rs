use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Whether a seller lists products (orders) or offers bookable services
/// (bookings). Picks the earnings source and its terminal status.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SellerMode {
    #[default]
    Seller,
    Service,
}

impl SellerMode {
    pub fn is_service_mode(&self) -> bool {
        matches!(self, SellerMode::Service)
    }

    /// The status under which an order/booking counts toward earnings.
    pub fn terminal_status(&self) -> &'static str {
        match self {
            SellerMode::Seller => "completed",
            SellerMode::Service => "approved",
        }
    }
}

impl Display for SellerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seller_mode = match self {
            SellerMode::Seller => "seller",
            SellerMode::Service => "service",
        };
        write!(f, "{}", seller_mode)
    }
}

impl From<&str> for SellerMode {
    fn from(value: &str) -> Self {
        match value {
            "service" => SellerMode::Service,
            _ => SellerMode::Seller,
        }
    }
}
