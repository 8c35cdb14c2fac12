//! Reservation model: a client's request to hold a property pending
//! contract conversion.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// Lifecycle status of a reservation.
///
/// Starts at `Pending` on creation. `Rejected` is terminal for this
/// service; nothing here resurrects a rejected reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReservationStatus {
    /// Convert to database string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from database string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted reservation row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier (server-generated).
    pub id: Uuid,

    /// Human-facing tracking number (`TRK-XXXXXXXX`).
    pub tracking_number: String,

    /// The property being reserved.
    pub property_id: Uuid,

    /// Denormalized snapshot of the property title at submission time.
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

    /// Employment status (employed, self-employed, ...).
    pub employment_status: String,

    /// Years with the current employer.
    pub years_employed: i32,

    /// Declared monthly income.
    pub monthly_income: Decimal,

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

    /// Public URL of the uploaded identity document, if one was attached.
    pub document_url: Option<String>,

    /// Current status string; see [`ReservationStatus`].
    pub status: String,

    /// Staff member who rejected the reservation, if rejected.
    pub rejected_by: Option<Uuid>,

    /// Free-text rejection reason, if rejected.
    pub rejected_reason: Option<String>,

    /// When the reservation was submitted.
    pub created_at: DateTime<Utc>,

    /// When the reservation was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Typed view of the status column. Unknown values read back as `None`.
    #[must_use]
    pub fn status(&self) -> Option<ReservationStatus> {
        ReservationStatus::parse(&self.status)
    }
}

/// Input for creating a new reservation.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub tracking_number: String,
    pub property_id: Uuid,
    pub property_title: String,
    pub reservation_fee: Decimal,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub occupation: String,
    pub employer: String,
    pub employment_status: String,
    pub years_employed: i32,
    pub monthly_income: Decimal,
    pub other_income_source: Option<String>,
    pub other_income_amount: Option<Decimal>,
    pub total_monthly_income: Option<Decimal>,
    pub message: Option<String>,
    pub document_type: Option<String>,
    pub document_url: Option<String>,
}

/// Filter options for listing reservations.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Only reservations submitted by this user.
    pub user_id: Option<Uuid>,
    /// Only reservations in this status.
    pub status: Option<ReservationStatus>,
}

impl Reservation {
    /// Insert a new reservation with `status = pending`.
    pub async fn create<'e, E>(executor: E, data: CreateReservation) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            INSERT INTO reservations (
                tracking_number, property_id, property_title, reservation_fee,
                user_id, full_name, email, phone, address,
                occupation, employer, employment_status, years_employed,
                monthly_income, other_income_source, other_income_amount,
                total_monthly_income, message, document_type, document_url,
                status, created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
                'pending', NOW(), NOW()
            )
            RETURNING *
            ",
        )
        .bind(&data.tracking_number)
        .bind(data.property_id)
        .bind(&data.property_title)
        .bind(data.reservation_fee)
        .bind(data.user_id)
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.occupation)
        .bind(&data.employer)
        .bind(&data.employment_status)
        .bind(data.years_employed)
        .bind(data.monthly_income)
        .bind(&data.other_income_source)
        .bind(data.other_income_amount)
        .bind(data.total_monthly_income)
        .bind(&data.message)
        .bind(&data.document_type)
        .bind(&data.document_url)
        .fetch_one(executor)
        .await
    }

    /// Apply the terminal rejected status to one reservation.
    ///
    /// Re-stamps `updated_at` on every call, so re-rejecting an already
    /// rejected reservation succeeds. Returns `RowNotFound` when no row
    /// matches the identifier.
    pub async fn mark_rejected<'e, E>(
        executor: E,
        id: Uuid,
        rejected_by: Option<Uuid>,
        reason: Option<&str>,
    ) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            UPDATE reservations
            SET status = 'rejected',
                rejected_by = $2,
                rejected_reason = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(id)
        .bind(rejected_by)
        .bind(reason)
        .fetch_one(executor)
        .await
    }

    /// List reservations matching the filter, newest first.
    ///
    /// The descending creation-time order is a caller-facing guarantee.
    pub async fn list<'e, E>(
        executor: E,
        filter: &ReservationFilter,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            SELECT * FROM reservations
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            ",
        )
        .bind(filter.user_id)
        .bind(filter.status.map(|s| s.as_str()))
        .fetch_all(executor)
        .await
    }
}
