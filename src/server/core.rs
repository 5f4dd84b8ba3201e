use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::router::router;
use crate::server::state::AppState;
use crate::storage::{CredentialStore, SqliteCredentialStore};

pub struct Server {
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Open the configured SQLite store and bind the listener.
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let store = SqliteCredentialStore::open(&config.database_path)?;
        info!("Credential store opened at {}", config.database_path);

        Self::with_store(config, Arc::new(store)).await
    }

    /// Bind the listener in front of an already opened store.
    pub async fn with_store(
        config: ServerConfig,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, ServerError> {
        let addr = config.socket_addr().ok_or_else(|| {
            ServerError::InvalidAddress(format!("{}:{}", config.bind_address, config.port))
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!("Server bound to {}", listener.local_addr()?);

        Ok(Self {
            listener,
            state: AppState::new(store, Arc::new(config)),
        })
    }

    /// Address the listener is actually bound to
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until the process is stopped. Each connection runs on its
    /// own task.
    pub async fn start(self) -> Result<(), ServerError> {
        info!("Starting account server on {}", self.local_addr()?);

        axum::serve(self.listener, router(self.state)).await?;
        Ok(())
    }
}
