//! Request models for the Reservation API.

use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Reservation fields submitted as the JSON part of the multipart form.
///
/// Everything is optional at the deserialization layer; the service owns the
/// required-field check so a missing field yields the documented validation
/// error rather than a deserializer rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// The property being reserved.
    pub property_id: Option<Uuid>,

    /// Property title snapshot shown on the reservation.
    pub property_title: Option<String>,

    /// Reservation fee quoted at submission time.
    pub reservation_fee: Option<Decimal>,

    /// The requesting user.
    pub user_id: Option<Uuid>,

    /// Client full name.
    pub full_name: Option<String>,

    /// Client email address.
    pub email: Option<String>,

    /// Client phone number.
    pub phone: Option<String>,

    /// Client residential address.
    pub address: Option<String>,

    /// Client occupation.
    pub occupation: Option<String>,

    /// Client employer name.
    pub employer: Option<String>,

    /// Employment status (employed, self-employed, ...).
    pub employment_status: Option<String>,

    /// Years with the current employer; must be zero or more.
    pub years_employed: Option<i32>,

    /// Declared monthly income; must be greater than zero.
    pub monthly_income: Option<Decimal>,

    /// Secondary income source, if any.
    pub other_income_source: Option<String>,

    /// Secondary income amount, if any.
    pub other_income_amount: Option<Decimal>,

    /// Declared total monthly income across all sources.
    pub total_monthly_income: Option<Decimal>,

    /// Free-text message from the client.
    pub message: Option<String>,

    /// Declared identity-document type (e.g. "passport").
    pub document_type: Option<String>,
}

/// An identity-document file part extracted from the multipart form.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Client-declared filename, untrusted.
    pub filename: String,

    /// Client-declared MIME type.
    pub content_type: String,

    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    /// Whether the part carries any content at all.
    ///
    /// Browsers submit an empty file part when the input was left blank;
    /// the intake pipeline treats that the same as no file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Body for `POST /reservations/reject`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RejectReservationRequest {
    /// The reservation to reject. Required.
    pub reservation_id: Option<String>,

    /// Staff member performing the rejection. Optional audit metadata.
    pub rejected_by: Option<Uuid>,

    /// Free-text rejection reason. Optional audit metadata.
    pub reason: Option<String>,
}

/// Query parameters for `GET /reservations`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListReservationsQuery {
    /// Only reservations submitted by this user.
    #[serde(alias = "userId")]
    pub user_id: Option<Uuid>,

    /// Only reservations in this status (pending, approved or rejected).
    pub status: Option<String>,
}
