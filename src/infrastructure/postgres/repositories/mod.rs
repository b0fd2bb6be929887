pub mod bookings;
pub mod chats;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod sellers;
