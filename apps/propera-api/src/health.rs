//! Liveness and readiness probes.

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// Probe response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeResponse {
    pub status: &'static str,
}

/// Liveness probe. Always succeeds while the process is running.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Process is alive", body = ProbeResponse)),
    tag = "Health"
)]
pub async fn healthz_handler() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "ok" })
}

/// Readiness probe. Verifies the database connection is usable.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Ready to serve traffic", body = ProbeResponse),
        (status = 503, description = "Database unreachable"),
    ),
    tag = "Health"
)]
pub async fn readyz_handler(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<ProbeResponse>, StatusCode> {
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => Ok(Json(ProbeResponse { status: "ready" })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
