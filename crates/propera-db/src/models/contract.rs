//! Contract model.
//!
//! Contracts are generated from approved reservations by an external
//! subsystem; this service only reads them to enrich listings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// A contract generated from an approved reservation. Read-only here.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Contract {
    /// Unique identifier.
    pub id: Uuid,

    /// The reservation this contract was generated from.
    pub reservation_id: Uuid,

    /// Human-facing contract number.
    pub contract_number: String,

    /// Payment-plan length in months.
    pub payment_plan_months: i32,

    /// Monthly installment amount.
    pub monthly_installment: Decimal,

    /// Contract status (owned by the conversion subsystem).
    pub status: String,

    /// When the contract was created.
    pub created_at: DateTime<Utc>,

    /// When the contract was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Find the contract for a reservation, if one exists.
    ///
    /// A reservation has at most one contract; zero means it has not been
    /// converted yet.
    pub async fn find_by_reservation<'e, E>(
        executor: E,
        reservation_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            SELECT * FROM contracts
            WHERE reservation_id = $1
            ",
        )
        .bind(reservation_id)
        .fetch_optional(executor)
        .await
    }
}
