#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use shortener_web::infrastructure::BackendClient;
use shortener_web::state::AppState;

/// Builds an `AppState` whose backend client points at `backend_url`.
pub fn create_test_state(backend_url: &str) -> AppState {
    let backend = BackendClient::new(reqwest::Client::new(), backend_url);
    AppState::new(Arc::new(backend))
}

/// Serves `router` on an OS-assigned local port and returns its base URL.
///
/// The server task runs until the test process exits.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on, for unreachable-backend
/// tests.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
