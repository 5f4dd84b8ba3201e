//! Credential store capability

use async_trait::async_trait;

use crate::auth::User;
use crate::error::StoreError;

/// Persistence boundary for user records.
///
/// Usernames passed in are expected to be normalized already. `insert` does
/// not enforce uniqueness; callers check `username_exists` first.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Append a record.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Whether a record with exactly this username exists.
    /// Lookup failures are logged and reported as `false`.
    async fn username_exists(&self, username: &str) -> bool;

    /// Whether the record for `user.username` has exactly `user.password`.
    /// Lookup failures are logged and reported as `false`.
    async fn password_matches(&self, user: &User) -> bool;
}
