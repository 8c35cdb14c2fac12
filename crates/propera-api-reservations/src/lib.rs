//! Reservation API for the Propera platform.
//!
//! Implements the reservation lifecycle:
//! - `POST /reservations` — multipart intake with optional identity-document
//!   upload
//! - `GET /reservations` — filtered listing enriched with contract and
//!   payment-schedule data
//! - `POST /reservations/reject` — terminal status transition
//!
//! Collaborators (data store, document storage) are injected through the
//! [`propera_db::ReservationStore`] and [`services::DocumentStorage`] traits.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod validation;

pub use error::ApiReservationsError;
pub use router::{reservations_router, ReservationsState};
pub use services::{DocumentStorage, LocalDocumentStorage, ReservationService};
