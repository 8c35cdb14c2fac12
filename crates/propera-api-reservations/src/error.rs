//! Error types for the Reservation API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use propera_db::DbError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the Reservation API.
#[derive(Debug, thiserror::Error)]
pub enum ApiReservationsError {
    /// Backing-store credentials or other required configuration missing.
    #[error("server configuration error")]
    Configuration(String),

    /// Missing or ill-formed required input.
    #[error("{0}")]
    Validation(String),

    /// Uploaded file's declared type is not allowed for identity documents.
    #[error("invalid file type: {0}")]
    InvalidFileType(String),

    /// Uploaded file exceeds the identity-document size cap.
    #[error("{0}")]
    FileTooLarge(String),

    /// Declared monthly income failed the positive-amount check.
    #[error("monthly income must be greater than zero")]
    InvalidIncome,

    /// Declared years employed failed the non-negative check.
    #[error("years employed cannot be negative")]
    InvalidYearsEmployed,

    /// The object store failed to accept the identity document.
    #[error("document upload failed: {0}")]
    UploadFailed(String),

    /// A data-store operation failed. The underlying store's message is
    /// reported verbatim for diagnostics.
    #[error("{0}")]
    Persistence(String),

    /// Anything uncaught.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiReservationsError {
    /// Machine-oriented error code carried in the response envelope.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::Validation(_) => "validation_error",
            Self::InvalidFileType(_) => "invalid_file_type",
            Self::FileTooLarge(_) => "file_too_large",
            Self::InvalidIncome => "invalid_income",
            Self::InvalidYearsEmployed => "invalid_years_employed",
            Self::UploadFailed(_) => "upload_failed",
            Self::Persistence(_) => "persistence_error",
            Self::Unexpected(_) => "unexpected_error",
        }
    }

    /// HTTP status communicating the error class.
    ///
    /// Persistence failures surface as 400 on all three operations (store
    /// rejections are caller-visible outcomes, not server faults); only
    /// configuration, upload and unexpected failures map to 500.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidFileType(_)
            | Self::FileTooLarge(_)
            | Self::InvalidIncome
            | Self::InvalidYearsEmployed
            | Self::Persistence(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::UploadFailed(_) | Self::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DbError> for ApiReservationsError {
    fn from(err: DbError) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Failure response envelope.
///
/// Every failure carries `success: false`, a machine-oriented `error` code
/// and a human-oriented `message`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiReservationsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Configuration(detail) => {
                tracing::error!(detail = %detail, "Configuration error");
            }
            Self::UploadFailed(detail) => {
                tracing::error!(detail = %detail, "Document upload failed");
            }
            Self::Unexpected(detail) => {
                tracing::error!(detail = %detail, "Unexpected error");
            }
            _ => {}
        }

        let body = ErrorBody {
            success: false,
            error: self.error_code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
