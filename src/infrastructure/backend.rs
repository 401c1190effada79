//! HTTP client for the external shortener backend.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode};
use reqwest::header::CONTENT_TYPE;

use crate::api::dto::shorten::ShortenRequest;

/// A backend response held for verbatim relay to the browser.
///
/// The body is kept as raw bytes; this client never interprets what the
/// backend returned, success or not.
#[derive(Debug)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

/// Client for the external shortener backend.
///
/// Wraps a shared [`reqwest::Client`] plus the configured base URL.
/// A single best-effort request per call: no retries, no timeouts.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The configured backend base URL, as given.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash on the
    /// configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Forwards a shorten request to `POST {base}/shorten`.
    ///
    /// Returns the backend's status, content type, and raw body for the
    /// caller to relay.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the request cannot be sent or the
    /// response body cannot be read.
    pub async fn shorten(&self, url: &str) -> Result<RelayedResponse, reqwest::Error> {
        let response = self
            .http
            .post(self.endpoint("/shorten"))
            .json(&ShortenRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        let status =
            StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| HeaderValue::from_bytes(value.as_bytes()).ok());

        let body = response.bytes().await?;

        Ok(RelayedResponse {
            status,
            content_type,
            body,
        })
    }

    /// Probes `GET {base}/health`.
    ///
    /// Fail-open towards the caller: any transport error is logged and
    /// reported as unhealthy.
    pub async fn health(&self) -> bool {
        match self.http.get(self.endpoint("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("backend health probe failed: {e}");
                false
            }
        }
    }
}
