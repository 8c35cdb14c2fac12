//! Application state shared across routers.

use crate::config::Config;
use propera_api_reservations::{LocalDocumentStorage, ReservationsState};
use propera_db::PgReservationStore;
use sqlx::PgPool;
use std::sync::Arc;

/// Top-level application state.
///
/// Owns the database pool and the per-router states built from it.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub reservations: ReservationsState,
}

impl AppState {
    /// Wire concrete stores into the router states.
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let store = Arc::new(PgReservationStore::new(pool.clone()));
        let documents = Arc::new(LocalDocumentStorage::new(
            config.document_storage_path.clone(),
            config.document_url_prefix.clone(),
        ));
        Self {
            pool,
            reservations: ReservationsState::new(store, documents),
        }
    }
}
