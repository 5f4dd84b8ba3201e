//! Log-in workflow
//!
//! The username goes through the same normalization as sign-up. Every failure
//! surfaces as `InvalidCredentials`, so callers cannot tell an unknown user
//! from a wrong password.

use log::debug;

use super::credentials::User;
use super::normalize::{check_username_length, normalize_username};
use super::results::LoginResult;
use crate::config::ServerConfig;
use crate::error::AccountError;
use crate::storage::CredentialStore;

/// Verifies `user` against the store.
pub async fn log_in(
    store: &dyn CredentialStore,
    user: User,
    config: &ServerConfig,
) -> Result<LoginResult, AccountError> {
    let username = match normalize_username(&user.username) {
        Ok(username) => username,
        Err(e) => {
            debug!("Login with unusable username: {}", e);
            return Err(AccountError::InvalidCredentials);
        }
    };
    if check_username_length(&username, config.max_username_length).is_err() {
        return Err(AccountError::InvalidCredentials);
    }

    let candidate = User {
        username,
        password: user.password,
    };

    // Both lookups always run.
    let exists = store.username_exists(&candidate.username).await;
    let password_ok = store.password_matches(&candidate).await;

    if exists && password_ok {
        Ok(LoginResult {
            username: candidate.username,
        })
    } else {
        Err(AccountError::InvalidCredentials)
    }
}
