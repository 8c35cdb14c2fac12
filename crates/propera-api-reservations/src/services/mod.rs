//! Services for the Reservation API.

pub mod document_storage;
pub mod reservation_service;

pub use document_storage::{DocumentStorage, LocalDocumentStorage};
pub use reservation_service::ReservationService;
