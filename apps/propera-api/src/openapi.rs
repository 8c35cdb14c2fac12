//! `OpenAPI` documentation generation.
//!
//! Aggregates the annotated handlers into one document served as plain JSON
//! at `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::health::ProbeResponse;
use propera_api_reservations::error::ErrorBody;
use propera_api_reservations::models::{
    ContractResponse, CreateReservationRequest, EnrichedReservation, InstallmentResponse,
    RejectReservationRequest, ReservationEnvelope, ReservationListResponse, ReservationResponse,
};

/// `OpenAPI` documentation for the reservation API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Propera API",
        version = "0.1.0",
        description = "Property reservation intake and tracking service"
    ),
    paths(
        crate::health::healthz_handler,
        crate::health::readyz_handler,
        propera_api_reservations::handlers::create::create_reservation_handler,
        propera_api_reservations::handlers::list::list_reservations_handler,
        propera_api_reservations::handlers::reject::reject_reservation_handler,
    ),
    components(schemas(
        ProbeResponse,
        CreateReservationRequest,
        RejectReservationRequest,
        ReservationResponse,
        ReservationEnvelope,
        ContractResponse,
        InstallmentResponse,
        EnrichedReservation,
        ReservationListResponse,
        ErrorBody,
    )),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Reservations", description = "Reservation intake, listing, and rejection")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
