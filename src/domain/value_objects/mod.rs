pub mod bookings;
pub mod earnings;
pub mod entitlements;
pub mod enums;
pub mod orders;
pub mod plans;
pub mod products;
pub mod review_eligibility;
pub mod reviews;
pub mod sellers;
pub mod time_slots;
