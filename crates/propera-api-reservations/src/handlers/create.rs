//! Create reservation endpoint handler.
//!
//! POST /reservations - Multipart intake: a `reservation` part carrying the
//! JSON-encoded fields, an optional `file` part with the identity document,
//! and an optional `document_type` part.

use crate::error::{ApiReservationsError, ErrorBody};
use crate::models::{
    ApiResponse, CreateReservationRequest, ReservationEnvelope, ReservationResponse,
    UploadedDocument,
};
use crate::services::ReservationService;
use axum::{http::StatusCode, Extension, Json};
use axum_extra::extract::Multipart;
use std::sync::Arc;

/// Submits a new property reservation.
#[utoipa::path(
    post,
    path = "/reservations",
    request_body(content = CreateReservationRequest, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Reservation created", body = ReservationEnvelope),
        (status = 400, description = "Validation or upload-policy failure", body = ErrorBody),
        (status = 500, description = "Upload or server failure", body = ErrorBody),
    ),
    tag = "Reservations"
)]
pub async fn create_reservation_handler(
    Extension(service): Extension<Arc<ReservationService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiReservationsError> {
    let mut request: Option<CreateReservationRequest> = None;
    let mut document_type: Option<String> = None;
    let mut file: Option<UploadedDocument> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiReservationsError::Validation(format!("Failed to parse multipart: {e}"))
    })? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "reservation" => {
                let text = field.text().await.map_err(|e| {
                    ApiReservationsError::Validation(format!("Invalid reservation part: {e}"))
                })?;
                request = Some(serde_json::from_str(&text).map_err(|e| {
                    ApiReservationsError::Validation(format!("Invalid reservation payload: {e}"))
                })?);
            }
            "document_type" => {
                let text = field.text().await.map_err(|e| {
                    ApiReservationsError::Validation(format!("Invalid document_type: {e}"))
                })?;
                document_type = Some(text);
            }
            "file" => {
                let filename = field
                    .file_name()
                    .map(std::string::ToString::to_string)
                    .unwrap_or_default();
                let content_type = field
                    .content_type()
                    .map(std::string::ToString::to_string)
                    .unwrap_or_default();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiReservationsError::Validation(format!("Failed to read file: {e}"))
                })?;
                file = Some(UploadedDocument {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let mut request = request.ok_or_else(|| {
        ApiReservationsError::Validation("missing reservation payload".to_string())
    })?;
    if document_type.is_some() {
        request.document_type = document_type;
    }

    tracing::info!(
        has_file = file.is_some(),
        "Received reservation submission"
    );

    let reservation = service.create_reservation(request, file).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            reservation.into(),
            "Reservation submitted successfully",
        )),
    ))
}
