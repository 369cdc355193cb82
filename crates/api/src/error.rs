use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use recbase_core::error::CoreError;
use recbase_core::validation::ValidationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain errors from `recbase_core` and implements
/// [`IntoResponse`] to produce the service's JSON error bodies:
///
/// - not found      -> 404 `{ "message": .. }`
/// - validation     -> 400 `{ "message": .., "errors": [{field, message}, ..] }`
/// - anything else  -> 500 `{ "message": "Internal Server Error" }`
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `recbase_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Field-level validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(%id, "{} not found", entity);
                let body = json!({ "message": format!("{entity} not found") });
                (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
            }
            AppError::Validation(err) => {
                let body = json!({
                    "message": "Validation error",
                    "errors": err.errors,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            AppError::Core(CoreError::Internal(msg)) | AppError::Internal(msg) => {
                // Log the detail for operators; never leak it to the caller.
                tracing::error!(error = %msg, "Internal error");
                let body = json!({ "message": "Internal Server Error" });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
