pub mod account_deletion;
pub mod booking_workflow;
pub mod earnings_reconciliation;
pub mod entitlements;
pub mod order_workflow;
pub mod product_catalog;
pub mod review_submission;
pub mod seller_account;
