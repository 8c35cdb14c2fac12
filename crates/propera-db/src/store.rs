//! Reservation store abstraction.
//!
//! Services depend on [`ReservationStore`] rather than on a connection pool
//! so integration tests can substitute an in-memory fake. The production
//! implementation is [`PgReservationStore`].

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::models::{
    Contract, CreateReservation, PaymentSchedule, Reservation, ReservationFilter,
};

/// Data-store operations needed by the reservation service.
///
/// Contract and payment-schedule reads are part of the same abstraction
/// because listing enrichment consults them through the same repository.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Insert a new reservation and return the persisted row.
    async fn insert_reservation(&self, data: CreateReservation) -> Result<Reservation, DbError>;

    /// Set `status = rejected` on one reservation and return the updated row.
    ///
    /// Fails with [`DbError::NotFound`] when no row matches.
    async fn mark_rejected(
        &self,
        id: Uuid,
        rejected_by: Option<Uuid>,
        reason: Option<String>,
    ) -> Result<Reservation, DbError>;

    /// List reservations matching the filter, ordered by creation time
    /// descending.
    async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, DbError>;

    /// Find the contract for a reservation, if one exists.
    async fn find_contract(&self, reservation_id: Uuid) -> Result<Option<Contract>, DbError>;

    /// List the payment schedule for a contract, ordered by installment
    /// number.
    async fn list_schedules(&self, contract_id: Uuid) -> Result<Vec<PaymentSchedule>, DbError>;
}

/// `PostgreSQL` implementation of [`ReservationStore`].
#[derive(Clone)]
pub struct PgReservationStore {
    pool: PgPool,
}

impl PgReservationStore {
    /// Create a store backed by the given pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn insert_reservation(&self, data: CreateReservation) -> Result<Reservation, DbError> {
        Reservation::create(&self.pool, data)
            .await
            .map_err(DbError::QueryFailed)
    }

    async fn mark_rejected(
        &self,
        id: Uuid,
        rejected_by: Option<Uuid>,
        reason: Option<String>,
    ) -> Result<Reservation, DbError> {
        Reservation::mark_rejected(&self.pool, id, rejected_by, reason.as_deref())
            .await
            .map_err(|e| DbError::from_row_lookup(e, &format!("reservation {id}")))
    }

    async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, DbError> {
        Reservation::list(&self.pool, filter)
            .await
            .map_err(DbError::QueryFailed)
    }

    async fn find_contract(&self, reservation_id: Uuid) -> Result<Option<Contract>, DbError> {
        Contract::find_by_reservation(&self.pool, reservation_id)
            .await
            .map_err(DbError::QueryFailed)
    }

    async fn list_schedules(&self, contract_id: Uuid) -> Result<Vec<PaymentSchedule>, DbError> {
        PaymentSchedule::list_for_contract(&self.pool, contract_id)
            .await
            .map_err(DbError::QueryFailed)
    }
}
