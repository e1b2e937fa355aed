use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spacetour_core::error::CoreError;

use crate::auth::identity::IdentityError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spacetour_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The identity provider refused a request or could not be reached.
    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status, machine-readable code and client-facing message.
    ///
    /// Internal details are logged here and replaced with a generic message.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Integrity(msg) => {
                    tracing::error!(error = %msg, "Data integrity violation");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- Identity provider errors ---
            AppError::Identity(err) => classify_identity_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify an identity provider error.
///
/// - Rejections keep the provider's message: 429 stays 429, 422 (weak
///   password, existing user) maps to 400, everything else to 401.
/// - Server errors and transport failures map to 502.
fn classify_identity_error(err: &IdentityError) -> (StatusCode, &'static str, String) {
    match err {
        IdentityError::Rejected { status, message } => match *status {
            429 => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                message.clone(),
            ),
            422 => (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone()),
            _ => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message.clone()),
        },
        other => {
            tracing::error!(error = %other, "Identity provider unavailable");
            (
                StatusCode::BAD_GATEWAY,
                "IDENTITY_UNAVAILABLE",
                "Authentication service is unavailable".to_string(),
            )
        }
    }
}
