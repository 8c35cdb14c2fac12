//! Payment schedule model.
//!
//! Installment rows belonging to a contract, owned by the conversion
//! subsystem and read here for listing enrichment.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

/// One installment in a contract's payment schedule.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PaymentSchedule {
    /// Unique identifier.
    pub id: Uuid,

    /// The contract this installment belongs to.
    pub contract_id: Uuid,

    /// Position in the schedule, starting at 1.
    pub installment_number: i32,

    /// Amount due for this installment.
    pub amount: Decimal,

    /// Date the installment falls due.
    pub due_date: NaiveDate,

    /// Whether the installment has been paid.
    pub is_paid: bool,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

impl PaymentSchedule {
    /// List all installments for a contract, ordered by installment number.
    ///
    /// Empty when the contract has no scheduled installments yet.
    pub async fn list_for_contract<'e, E>(
        executor: E,
        contract_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as(
            r"
            SELECT * FROM payment_schedules
            WHERE contract_id = $1
            ORDER BY installment_number ASC
            ",
        )
        .bind(contract_id)
        .fetch_all(executor)
        .await
    }
}
