use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use momentum_core::error::CoreError;
use momentum_voice::VoiceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent
/// `{ "success": false, "error": ..., "code": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `momentum-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body failed field validation.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A failure in an external voice provider.
    #[error(transparent)]
    Voice(#[from] VoiceError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Field-level validation failures ---
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),

            // --- External voice providers ---
            AppError::Voice(err) => classify_voice_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a voice provider error.
///
/// A missing credential is server misconfiguration (500, named so the
/// operator can fix it); everything else is an upstream failure surfaced
/// as 502 with a generic message. Details go to the log, not the caller.
fn classify_voice_error(err: &VoiceError) -> (StatusCode, &'static str, String) {
    match err {
        VoiceError::NotConfigured(what) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "NOT_CONFIGURED",
            format!("{what} is not configured"),
        ),
        other => {
            tracing::error!(error = %other, "Voice provider error");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Voice provider request failed".to_string(),
            )
        }
    }
}
