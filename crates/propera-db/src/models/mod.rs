//! Database entity models for propera-db.
//!
//! These models represent the database tables and provide
//! type-safe interactions with `PostgreSQL`.

pub mod contract;
pub mod payment_schedule;
pub mod reservation;

pub use contract::Contract;
pub use payment_schedule::PaymentSchedule;
pub use reservation::{CreateReservation, Reservation, ReservationFilter, ReservationStatus};
