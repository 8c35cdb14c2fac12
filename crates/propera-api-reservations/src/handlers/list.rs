//! List reservations endpoint handler.
//!
//! GET /reservations - Filtered listing, newest first, each reservation
//! merged with its contract and payment schedule.

use crate::error::{ApiReservationsError, ErrorBody};
use crate::models::{ListReservationsQuery, ReservationListResponse};
use crate::services::ReservationService;
use axum::{extract::Query, Extension, Json};
use propera_db::{ReservationFilter, ReservationStatus};
use std::sync::Arc;

/// Lists reservations, optionally filtered by user and status.
#[utoipa::path(
    get,
    path = "/reservations",
    params(ListReservationsQuery),
    responses(
        (status = 200, description = "Enriched reservations", body = ReservationListResponse),
        (status = 400, description = "Invalid filter or query failure", body = ErrorBody),
    ),
    tag = "Reservations"
)]
pub async fn list_reservations_handler(
    Extension(service): Extension<Arc<ReservationService>>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ReservationListResponse>, ApiReservationsError> {
    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Some(ReservationStatus::parse(raw).ok_or_else(|| {
            ApiReservationsError::Validation(format!("invalid status filter: {raw}"))
        })?),
        None => None,
    };

    let filter = ReservationFilter {
        user_id: query.user_id,
        status,
    };

    tracing::info!(
        user_id = ?filter.user_id,
        status = ?filter.status,
        "Listing reservations"
    );

    let (data, total) = service.list_reservations(filter).await?;

    Ok(Json(ReservationListResponse {
        success: true,
        data,
        total,
        message: "Reservations retrieved successfully".to_string(),
    }))
}
