//! Reservation API router configuration.
//!
//! Configures routes for the reservation endpoints:
//! - POST /reservations - Submit a reservation (multipart)
//! - GET /reservations - List reservations with contract/schedule enrichment
//! - POST /reservations/reject - Reject a reservation

use crate::handlers::{
    create_reservation_handler, list_reservations_handler, reject_reservation_handler,
};
use crate::services::{DocumentStorage, ReservationService};
use crate::validation::upload::IDENTITY_DOCUMENT_MAX_BYTES;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use propera_db::ReservationStore;
use std::sync::Arc;

/// Headroom added to the body limit for multipart framing and the JSON part.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Application state for reservation routes.
#[derive(Clone)]
pub struct ReservationsState {
    /// Reservation service for intake, rejection and listing.
    pub service: Arc<ReservationService>,
}

impl ReservationsState {
    /// Create a new reservations state from the injected collaborators.
    pub fn new(store: Arc<dyn ReservationStore>, documents: Arc<dyn DocumentStorage>) -> Self {
        Self {
            service: Arc::new(ReservationService::new(store, documents)),
        }
    }
}

/// Create the reservations router with all endpoints.
///
/// Mounted under the `/reservations` prefix by the application.
pub fn reservations_router(state: ReservationsState) -> Router {
    Router::new()
        .route(
            "/",
            post(create_reservation_handler).get(list_reservations_handler),
        )
        .route("/reject", post(reject_reservation_handler))
        // The default axum body limit is far below the 10 MiB document cap.
        .layer(DefaultBodyLimit::max(
            IDENTITY_DOCUMENT_MAX_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(axum::Extension(state.service))
}
