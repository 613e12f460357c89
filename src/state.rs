use std::sync::Arc;

use crate::application::services::RedirectResolver;
use crate::domain::repositories::BlobStore;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RedirectResolver>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            resolver: Arc::new(RedirectResolver::new(store)),
        }
    }
}
