//! Reservation lifecycle service.
//!
//! Owns the intake pipeline (validate, optionally upload, generate a
//! tracking number, persist), the terminal rejection transition and the
//! enriched listing fan-out.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use propera_core::TrackingNumber;
use propera_db::{
    CreateReservation, Reservation, ReservationFilter, ReservationStore,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::ApiReservationsError;
use crate::models::{
    CreateReservationRequest, EnrichedReservation, RejectReservationRequest, UploadedDocument,
};
use crate::services::DocumentStorage;
use crate::validation::{sanitize_filename, validate_upload, UploadPolicy};

/// Fixed folder identity documents are uploaded into.
pub const IDENTITY_DOCUMENT_FOLDER: &str = "identity-documents";

/// How many reservations are enriched concurrently during a listing.
const ENRICH_CONCURRENCY: usize = 8;

/// Reservation lifecycle service.
///
/// Both collaborators are injected so tests can substitute fakes.
pub struct ReservationService {
    store: Arc<dyn ReservationStore>,
    documents: Arc<dyn DocumentStorage>,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(store: Arc<dyn ReservationStore>, documents: Arc<dyn DocumentStorage>) -> Self {
        Self { store, documents }
    }

    /// Intake pipeline: validate the submission, upload the identity
    /// document if one was attached, and persist the reservation.
    ///
    /// All validation happens before any write. A successful call performs
    /// at most one object-store write and exactly one insert; any validation
    /// failure performs zero writes.
    pub async fn create_reservation(
        &self,
        request: CreateReservationRequest,
        file: Option<UploadedDocument>,
    ) -> Result<Reservation, ApiReservationsError> {
        let missing =
            || ApiReservationsError::Validation("missing required fields".to_string());

        let property_id = request.property_id.ok_or_else(missing)?;
        let user_id = request.user_id.ok_or_else(missing)?;
        let phone = required_trimmed(request.phone.as_deref()).ok_or_else(missing)?;
        let address = required_trimmed(request.address.as_deref()).ok_or_else(missing)?;
        let occupation = required_trimmed(request.occupation.as_deref()).ok_or_else(missing)?;
        let employer = required_trimmed(request.employer.as_deref()).ok_or_else(missing)?;
        let employment_status =
            required_trimmed(request.employment_status.as_deref()).ok_or_else(missing)?;
        let years_employed = request.years_employed.ok_or_else(missing)?;
        let monthly_income = request.monthly_income.ok_or_else(missing)?;

        if monthly_income <= Decimal::ZERO {
            return Err(ApiReservationsError::InvalidIncome);
        }
        if years_employed < 0 {
            return Err(ApiReservationsError::InvalidYearsEmployed);
        }

        // Browsers send an empty file part when the input was left blank.
        let file = file.filter(|f| !f.is_empty());

        let mut document_url = None;
        let mut stored_filename = None;
        if let Some(file) = &file {
            validate_upload(
                &file.content_type,
                file.bytes.len(),
                &UploadPolicy::identity_document(),
            )?;

            let filename = Self::storage_filename(file);
            let url = self
                .documents
                .store(IDENTITY_DOCUMENT_FOLDER, &filename, &file.bytes)
                .await?;
            document_url = Some(url);
            stored_filename = Some(filename);
        }

        let tracking_number = TrackingNumber::generate();
        tracing::info!(
            tracking_number = %tracking_number,
            user_id = %user_id,
            property_id = %property_id,
            has_document = document_url.is_some(),
            "Creating reservation"
        );

        let data = CreateReservation {
            tracking_number: tracking_number.into_string(),
            property_id,
            property_title: request
                .property_title
                .map(|t| t.trim().to_string())
                .unwrap_or_default(),
            reservation_fee: request.reservation_fee.unwrap_or(Decimal::ZERO),
            user_id,
            full_name: request
                .full_name
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            email: request
                .email
                .map(|e| e.trim().to_string())
                .unwrap_or_default(),
            phone,
            address,
            occupation,
            employer,
            employment_status,
            years_employed,
            monthly_income,
            other_income_source: clean_optional(request.other_income_source),
            other_income_amount: request.other_income_amount,
            total_monthly_income: request.total_monthly_income,
            message: clean_optional(request.message),
            document_type: clean_optional(request.document_type),
            document_url,
        };

        let reservation = match self.store.insert_reservation(data).await {
            Ok(reservation) => reservation,
            Err(err) => {
                // The reservation and its document exist together or not at
                // all; remove the upload from the aborted intake.
                if let Some(filename) = stored_filename {
                    if let Err(cleanup) = self
                        .documents
                        .delete(IDENTITY_DOCUMENT_FOLDER, &filename)
                        .await
                    {
                        tracing::warn!(
                            filename = %filename,
                            error = %cleanup,
                            "Failed to remove document after aborted reservation"
                        );
                    }
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            reservation_id = %reservation.id,
            tracking_number = %reservation.tracking_number,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Apply the terminal rejected status to one reservation.
    ///
    /// Idempotent in effect: re-rejecting an already rejected reservation
    /// succeeds and re-stamps its modification timestamp.
    pub async fn reject_reservation(
        &self,
        request: RejectReservationRequest,
    ) -> Result<Reservation, ApiReservationsError> {
        let raw_id = request
            .reservation_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ApiReservationsError::Validation("missing reservation id".to_string())
            })?;
        let id = Uuid::parse_str(raw_id).map_err(|_| {
            ApiReservationsError::Validation(format!("invalid reservation id: {raw_id}"))
        })?;

        let reservation = self
            .store
            .mark_rejected(id, request.rejected_by, clean_optional(request.reason))
            .await?;

        tracing::info!(reservation_id = %reservation.id, "Reservation rejected");
        Ok(reservation)
    }

    /// List reservations matching the filter, newest first, each merged
    /// with its contract and ordered payment schedule.
    ///
    /// Enrichment runs concurrently across the reservation set; output
    /// order always matches the primary query's order. Returns the enriched
    /// sequence and its length.
    pub async fn list_reservations(
        &self,
        filter: ReservationFilter,
    ) -> Result<(Vec<EnrichedReservation>, usize), ApiReservationsError> {
        let reservations = self.store.list_reservations(&filter).await?;
        let total = reservations.len();

        // buffered() polls up to ENRICH_CONCURRENCY enrichments at once but
        // yields results in input order.
        let enriched: Vec<EnrichedReservation> = stream::iter(reservations)
            .map(|reservation| self.enrich(reservation))
            .buffered(ENRICH_CONCURRENCY)
            .collect()
            .await;

        Ok((enriched, total))
    }

    /// Attach contract and schedule data to one reservation.
    ///
    /// A failed sub-fetch never fails the listing; it degrades that
    /// reservation's enrichment fields to null and logs the cause.
    async fn enrich(&self, reservation: Reservation) -> EnrichedReservation {
        let contract = match self.store.find_contract(reservation.id).await {
            Ok(contract) => contract,
            Err(err) => {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    error = %err,
                    "Contract lookup failed; returning reservation without enrichment"
                );
                None
            }
        };

        let Some(contract) = contract else {
            return EnrichedReservation::new(reservation, None, None);
        };

        let schedules = match self.store.list_schedules(contract.id).await {
            Ok(mut rows) => {
                rows.sort_by_key(|row| row.installment_number);
                Some(rows)
            }
            Err(err) => {
                tracing::warn!(
                    reservation_id = %reservation.id,
                    contract_id = %contract.id,
                    error = %err,
                    "Schedule lookup failed; returning contract without installments"
                );
                None
            }
        };

        EnrichedReservation::new(reservation, Some(contract), schedules)
    }

    /// Storage name for an uploaded document: a fresh UUID plus the safest
    /// extension we can derive from the declared filename or MIME type.
    fn storage_filename(file: &UploadedDocument) -> String {
        let sanitized = sanitize_filename(&file.filename);
        let extension = sanitized
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| default_extension(&file.content_type).to_string());
        format!("{}.{extension}", Uuid::new_v4())
    }
}

/// Trim a required text field; whitespace-only counts as missing.
fn required_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Trim an optional text field; whitespace-only collapses to `None`.
fn clean_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Fallback file extension by declared MIME type.
fn default_extension(content_type: &str) -> &'static str {
    match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trimmed() {
        assert_eq!(required_trimmed(Some("  x  ")), Some("x".to_string()));
        assert_eq!(required_trimmed(Some("   ")), None);
        assert_eq!(required_trimmed(None), None);
    }

    #[test]
    fn test_clean_optional() {
        assert_eq!(
            clean_optional(Some("  note  ".to_string())),
            Some("note".to_string())
        );
        assert_eq!(clean_optional(Some("  ".to_string())), None);
        assert_eq!(clean_optional(None), None);
    }

    #[test]
    fn test_storage_filename_keeps_extension() {
        let file = UploadedDocument {
            filename: "../secret/my passport.PDF".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![1],
        };
        let name = ReservationService::storage_filename(&file);
        assert!(name.ends_with(".pdf"));
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_storage_filename_falls_back_to_content_type() {
        let file = UploadedDocument {
            filename: "noextension".to_string(),
            content_type: "image/webp".to_string(),
            bytes: vec![1],
        };
        assert!(ReservationService::storage_filename(&file).ends_with(".webp"));
    }
}
