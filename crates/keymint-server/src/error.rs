//! Error types for the server crate.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body failed to parse into a license request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// License issuance failed after the request parsed.
    #[error("issuance failed: {0}")]
    Issuance(#[from] keymint_license::LicenseError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ServerError::Issuance(e) => {
                // One failed request must not take the process down; log the
                // cause and keep the response generic.
                tracing::error!(error = %e, "license issuance failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal error" })),
                )
                    .into_response()
            }
        }
    }
}
