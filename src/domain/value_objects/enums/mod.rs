pub mod booking_statuses;
pub mod dashboard_tabs;
pub mod order_statuses;
pub mod plan_tiers;
pub mod seller_modes;
