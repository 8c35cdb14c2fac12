//! Database layer for the Propera reservation platform.
//!
//! Provides:
//! - Entity models with type-safe `PostgreSQL` access ([`models`])
//! - The [`ReservationStore`] trait and its `PostgreSQL` implementation,
//!   injected into services so tests can substitute an in-memory fake
//! - Schema migrations ([`migrations`])

pub mod error;
pub mod migrations;
pub mod models;
pub mod store;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{
    Contract, CreateReservation, PaymentSchedule, Reservation, ReservationFilter,
    ReservationStatus,
};
pub use store::{PgReservationStore, ReservationStore};
