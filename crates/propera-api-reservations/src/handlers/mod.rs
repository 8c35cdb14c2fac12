//! HTTP handlers for the Reservation API.

pub mod create;
pub mod list;
pub mod reject;

pub use create::create_reservation_handler;
pub use list::list_reservations_handler;
pub use reject::reject_reservation_handler;
