//! Request and response models for the Reservation API.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateReservationRequest, ListReservationsQuery, RejectReservationRequest, UploadedDocument,
};
pub use responses::{
    ApiResponse, ContractResponse, EnrichedReservation, InstallmentResponse,
    ReservationEnvelope, ReservationListResponse, ReservationResponse,
};
