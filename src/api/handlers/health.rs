//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend reachable
/// - **503 Service Unavailable**: Backend health probe failed
///
/// # Components Checked
///
/// 1. **Backend**: `GET {base}/health` against the shortener backend
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend_check = check_backend(&state).await;

    let all_healthy = backend_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            backend: backend_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the shortener backend's health endpoint.
async fn check_backend(state: &AppState) -> CheckStatus {
    if state.backend.health().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable at {}", state.backend.base_url())),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Backend health probe failed".to_string()),
        }
    }
}
