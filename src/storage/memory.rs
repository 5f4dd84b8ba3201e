//! In-memory credential store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::CredentialStore;
use crate::auth::User;
use crate::error::StoreError;

/// Keeps records in insertion order. Duplicates are stored if inserted.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: RwLock<Vec<User>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record
    pub async fn records(&self) -> Vec<User> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.records.write().await.push(user.clone());
        Ok(())
    }

    async fn username_exists(&self, username: &str) -> bool {
        self.records
            .read()
            .await
            .iter()
            .any(|record| record.username == username)
    }

    async fn password_matches(&self, user: &User) -> bool {
        self.records
            .read()
            .await
            .iter()
            .any(|record| record.username == user.username && record.password == user.password)
    }
}
