//! DTOs for the shorten proxy endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
///
/// Also the exact body forwarded to the backend `/shorten` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten, trimmed of surrounding whitespace.
    pub url: String,
}

/// Successful response produced by the backend.
///
/// The proxy relays the backend body verbatim and never constructs this
/// itself; the browser client parses it to render the short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}
