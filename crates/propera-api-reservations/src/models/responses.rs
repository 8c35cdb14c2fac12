//! Response models for the Reservation API.
//!
//! Every success body carries a `success` flag and a human-oriented
//! `message` alongside the data; failures are shaped by
//! [`crate::error::ErrorBody`].

use chrono::{DateTime, NaiveDate, Utc};
use propera_db::{Contract, PaymentSchedule, Reservation};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Generic success envelope for single-object responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(ReservationEnvelope = ApiResponse<ReservationResponse>)]
pub struct ApiResponse<T> {
    /// Always `true` on this type.
    pub success: bool,

    /// The operation result.
    pub data: T,

    /// Human-oriented outcome description.
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wrap a successful result.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }
}

/// A reservation as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationResponse {
    /// Unique identifier.
    pub id: Uuid,

    /// Human-facing tracking number (`TRK-XXXXXXXX`).
    pub tracking_number: String,

    /// The property being reserved.
    pub property_id: Uuid,

    /// Property title snapshot taken at submission time.
    pub property_title: String,

    /// Reservation fee quoted at submission time.
    pub reservation_fee: Decimal,

    /// The requesting user.
    pub user_id: Uuid,

    /// Client full name.
    pub full_name: String,

    /// Client email address.
    pub email: String,

    /// Client phone number.
    pub phone: String,

    /// Client residential address.
    pub address: String,

    /// Client occupation.
    pub occupation: String,

    /// Client employer name.
    pub employer: String,

    /// Employment status.
    pub employment_status: String,

    /// Years with the current employer.
    pub years_employed: i32,

    /// Declared monthly income.
    pub monthly_income: Decimal,

    /// Secondary income source, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_income_source: Option<String>,

    /// Secondary income amount, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_income_amount: Option<Decimal>,

    /// Declared total monthly income across all sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_monthly_income: Option<Decimal>,

    /// Free-text message from the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Declared identity-document type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,

    /// Public URL of the uploaded identity document, null when none was
    /// attached.
    pub document_url: Option<String>,

    /// Current status (pending, approved or rejected).
    pub status: String,

    /// Staff member who rejected the reservation, if rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<Uuid>,

    /// Free-text rejection reason, if rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,

    /// When the reservation was submitted.
    pub created_at: DateTime<Utc>,

    /// When the reservation was last modified.
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            tracking_number: r.tracking_number,
            property_id: r.property_id,
            property_title: r.property_title,
            reservation_fee: r.reservation_fee,
            user_id: r.user_id,
            full_name: r.full_name,
            email: r.email,
            phone: r.phone,
            address: r.address,
            occupation: r.occupation,
            employer: r.employer,
            employment_status: r.employment_status,
            years_employed: r.years_employed,
            monthly_income: r.monthly_income,
            other_income_source: r.other_income_source,
            other_income_amount: r.other_income_amount,
            total_monthly_income: r.total_monthly_income,
            message: r.message,
            document_type: r.document_type,
            document_url: r.document_url,
            status: r.status,
            rejected_by: r.rejected_by,
            rejected_reason: r.rejected_reason,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Contract summary attached to an enriched reservation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContractResponse {
    /// Contract identifier.
    pub id: Uuid,

    /// Human-facing contract number.
    pub contract_number: String,

    /// Payment-plan length in months.
    pub payment_plan_months: i32,

    /// Monthly installment amount.
    pub monthly_installment: Decimal,

    /// Contract status as reported by the conversion subsystem.
    pub status: String,
}

impl From<Contract> for ContractResponse {
    fn from(c: Contract) -> Self {
        Self {
            id: c.id,
            contract_number: c.contract_number,
            payment_plan_months: c.payment_plan_months,
            monthly_installment: c.monthly_installment,
            status: c.status,
        }
    }
}

/// One installment in an enriched reservation's payment schedule.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstallmentResponse {
    /// Installment identifier.
    pub id: Uuid,

    /// Position in the schedule, starting at 1.
    pub installment_number: i32,

    /// Amount due.
    pub amount: Decimal,

    /// Date the installment falls due.
    pub due_date: NaiveDate,

    /// Whether the installment has been paid.
    pub is_paid: bool,
}

impl From<PaymentSchedule> for InstallmentResponse {
    fn from(s: PaymentSchedule) -> Self {
        Self {
            id: s.id,
            installment_number: s.installment_number,
            amount: s.amount,
            due_date: s.due_date,
            is_paid: s.is_paid,
        }
    }
}

/// A reservation merged with its contract and payment schedule.
///
/// `contract` and `payment_schedules` are both null when the reservation has
/// not been converted. A converted reservation whose contract has no
/// installments yet carries an empty `payment_schedules` array, never null.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrichedReservation {
    /// The reservation fields, flattened into the object.
    #[serde(flatten)]
    #[schema(inline)]
    pub reservation: ReservationResponse,

    /// Contract generated from this reservation, if any.
    pub contract: Option<ContractResponse>,

    /// Ordered installment schedule, or null when no contract exists.
    pub payment_schedules: Option<Vec<InstallmentResponse>>,
}

impl EnrichedReservation {
    /// Merge a reservation with its enrichment results.
    #[must_use]
    pub fn new(
        reservation: Reservation,
        contract: Option<Contract>,
        schedules: Option<Vec<PaymentSchedule>>,
    ) -> Self {
        Self {
            reservation: reservation.into(),
            contract: contract.map(ContractResponse::from),
            payment_schedules: schedules
                .map(|rows| rows.into_iter().map(InstallmentResponse::from).collect()),
        }
    }
}

/// Success envelope for `GET /reservations`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationListResponse {
    /// Always `true` on this type.
    pub success: bool,

    /// Enriched reservations, newest first.
    pub data: Vec<EnrichedReservation>,

    /// Number of reservations returned.
    pub total: usize,

    /// Human-oriented outcome description.
    pub message: String,
}
