//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Forward a shorten request to the backend
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
