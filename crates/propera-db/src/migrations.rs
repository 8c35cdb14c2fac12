//! Schema migrations for the reservation tables.

use crate::error::DbError;
use sqlx::PgPool;

/// Run all pending migrations against the given pool.
///
/// Called once at startup, before the service accepts traffic.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(DbError::MigrationFailed)
}
