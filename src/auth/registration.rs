//! Sign-up workflow
//!
//! normalize -> uniqueness check -> insert. The check and the insert are two
//! separate store calls, so two concurrent sign-ups for the same username can
//! both pass the check and both insert.

use log::info;

use super::credentials::User;
use super::normalize::{check_username_length, normalize_username};
use super::results::SignUpResult;
use crate::config::ServerConfig;
use crate::error::AccountError;
use crate::storage::CredentialStore;

/// Registers `user` under its normalized username.
///
/// Nothing is written when normalization fails or the username is already
/// taken. The password is stored as given; empty passwords are accepted.
pub async fn sign_up(
    store: &dyn CredentialStore,
    user: User,
    config: &ServerConfig,
) -> Result<SignUpResult, AccountError> {
    let username = normalize_username(&user.username)?;
    check_username_length(&username, config.max_username_length)?;

    if store.username_exists(&username).await {
        return Err(AccountError::UsernameTaken(username));
    }

    let record = User {
        username,
        password: user.password,
    };
    store.insert(&record).await?;

    info!("Registered user {}", record.username);
    Ok(SignUpResult {
        username: record.username,
    })
}
