use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by rendering the failure envelope, so no
/// error ever escapes a handler as a transport-level failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `notes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request that could not be parsed (malformed JSON, bad path id).
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
            }
            AppError::Core(CoreError::Validation(msg)) | AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Request rejected");
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
            }
        }

        ApiResponse::failure(self.to_string()).into_response()
    }
}
