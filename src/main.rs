//! Account Server - Entry Point
//!
//! Sign-up and log-in over HTTP, backed by a SQLite table of users.

use account_server::error::ServerError;
use account_server::{Server, ServerConfig};
use log::{error, info};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching account server...");

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Load configuration, open the store, and serve. Any error here is fatal.
async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    let server = Server::new(config).await?;
    server.start().await
}
