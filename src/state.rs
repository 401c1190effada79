use std::sync::Arc;

use crate::infrastructure::BackendClient;

/// Shared application state injected into all handlers.
///
/// Holds only the backend client handle; requests carry no other state.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

impl AppState {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }
}
