//! Reject reservation endpoint handler.
//!
//! POST /reservations/reject - Moves one reservation to the terminal
//! rejected state.

use crate::error::{ApiReservationsError, ErrorBody};
use crate::models::{
    ApiResponse, RejectReservationRequest, ReservationEnvelope, ReservationResponse,
};
use crate::services::ReservationService;
use axum::{Extension, Json};
use std::sync::Arc;

/// Rejects a reservation by identifier.
#[utoipa::path(
    post,
    path = "/reservations/reject",
    request_body = RejectReservationRequest,
    responses(
        (status = 200, description = "Reservation rejected", body = ReservationEnvelope),
        (status = 400, description = "Missing reservation id or store rejection", body = ErrorBody),
    ),
    tag = "Reservations"
)]
pub async fn reject_reservation_handler(
    Extension(service): Extension<Arc<ReservationService>>,
    Json(request): Json<RejectReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiReservationsError> {
    tracing::info!(
        reservation_id = ?request.reservation_id,
        rejected_by = ?request.rejected_by,
        "Rejecting reservation"
    );

    let reservation = service.reject_reservation(request).await?;

    Ok(Json(ApiResponse::ok(
        reservation.into(),
        "Reservation rejected successfully",
    )))
}
