//! Handler for the shorten proxy endpoint.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::header::{self, HeaderValue},
    response::Response,
};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Forwards a shorten request to the backend and relays its response.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// The `url` value is trimmed before forwarding.
///
/// # Response
///
/// The backend's status code and body, verbatim. The backend's
/// `content-type` is preserved when present, `application/json` otherwise.
///
/// # Errors
///
/// - 400 `{"detail": "URL is required."}` when `url` is missing, not a
///   string, or empty after trimming
/// - 500 `{"detail": "Failed to process request."}` when the body is not
///   JSON or the forward fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: Value = serde_json::from_slice(&body)?;

    let url = payload
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if url.is_empty() {
        return Err(AppError::bad_request("URL is required."));
    }

    tracing::info!(
        "forwarding shorten request to {}",
        state.backend.endpoint("/shorten")
    );

    let relayed = state.backend.shorten(url).await?;

    let content_type = relayed
        .content_type
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let mut response = Response::new(Body::from(relayed.body));
    *response.status_mut() = relayed.status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);

    Ok(response)
}
