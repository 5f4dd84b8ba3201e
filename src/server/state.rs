//! State shared by every request handler

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::CredentialStore;

/// Injected into handlers through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn CredentialStore>, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
