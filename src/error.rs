//! Application error types and their HTTP representation.
//!
//! Every failure surfaced to a client uses the same body shape,
//! [`ErrorPayload`], so the browser side can always look for `detail`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical error body returned to clients on any failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub detail: String,
}

/// Errors produced while handling a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request payload failed validation. Maps to 400 with the
    /// validation message as `detail`.
    #[error("{detail}")]
    Validation { detail: String },

    /// The forward to the shortener backend failed (connect, send, or
    /// body read). Maps to 500 with a generic `detail`.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The inbound request body was not valid JSON. Maps to 500, same as
    /// any other processing failure.
    #[error("malformed request body: {0}")]
    Payload(#[from] serde_json::Error),
}

impl AppError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation { detail } => (StatusCode::BAD_REQUEST, detail),
            AppError::Upstream(e) => {
                tracing::error!("failed to reach shortener backend: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process request.".to_string(),
                )
            }
            AppError::Payload(e) => {
                tracing::error!("rejecting unparseable request body: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process request.".to_string(),
                )
            }
        };

        (status, Json(ErrorPayload { detail })).into_response()
    }
}
