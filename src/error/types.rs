//! Error types
//!
//! Domain-specific error types for the credential store, the account
//! workflows, and server startup.

use thiserror::Error;

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database connection lock poisoned")]
    Poisoned,

    #[error("Blocking store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Failures of the sign-up and log-in workflows
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds {max} characters")]
    UsernameTooLong { max: usize },

    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// Covers both unknown users and wrong passwords.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Fatal errors raised while bringing the server up
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to open credential store: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn test_invalid_config_becomes_server_error() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };

        let err: ServerError = config.validate().unwrap_err().into();
        assert!(matches!(err, ServerError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_store_error_becomes_account_error() {
        let err: AccountError = StoreError::Poisoned.into();
        assert!(matches!(err, AccountError::Store(StoreError::Poisoned)));
    }
}
