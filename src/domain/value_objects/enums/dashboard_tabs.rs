use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Tabs on the seller dashboard. Products and Orders are always present;
/// the rest depend on the seller's plan flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Products,
    Orders,
    Reviews,
    Messages,
    Analytics,
}

impl Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dashboard_tab = match self {
            DashboardTab::Products => "products",
            DashboardTab::Orders => "orders",
            DashboardTab::Reviews => "reviews",
            DashboardTab::Messages => "messages",
            DashboardTab::Analytics => "analytics",
        };
        write!(f, "{}", dashboard_tab)
    }
}
