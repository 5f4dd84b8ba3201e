//! SQLite credential store
//!
//! One `users(username, password)` table accessed through parameterized
//! statements. The connection sits behind a mutex and every statement runs on
//! tokio's blocking pool.

use async_trait::async_trait;
use log::{debug, error, warn};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

use super::store::CredentialStore;
use crate::auth::User;
use crate::error::StoreError;

/// `database_path` value that selects a private in-memory database
pub const MEMORY_PATH: &str = ":memory:";

/// No UNIQUE constraint: uniqueness is checked by the sign-up workflow.
const CREATE_USERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS users (
        username    TEXT NOT NULL,
        password    TEXT NOT NULL
    );
";

const INSERT_USER: &str = "INSERT INTO users (username, password) VALUES (?1, ?2)";

const USERNAME_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)";

const PASSWORD_MATCHES: &str =
    "SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1 AND password = ?2)";

pub struct SqliteCredentialStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCredentialStore {
    /// Open (or create) the database at `path` and make sure the users table
    /// exists. `":memory:"` opens an in-memory database.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == MEMORY_PATH {
            Connection::open_in_memory()?
        } else {
            Connection::open(Path::new(path))?
        };

        conn.execute_batch(CREATE_USERS_TABLE)?;
        debug!("users table ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(MEMORY_PATH)
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&guard).map_err(StoreError::from)
        })
        .await?
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let username = user.username.clone();
        let password = user.password.clone();

        let result = self
            .with_conn(move |conn| conn.execute(INSERT_USER, params![username, password]))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("Failed to insert user {}: {}", user.username, e);
                Err(e)
            }
        }
    }

    async fn username_exists(&self, username: &str) -> bool {
        let lookup = username.to_string();
        let result = self
            .with_conn(move |conn| {
                conn.query_row(USERNAME_EXISTS, params![lookup], |row| row.get::<_, bool>(0))
            })
            .await;

        result.unwrap_or_else(|e| {
            warn!("Username lookup for {} failed: {}", username, e);
            false
        })
    }

    async fn password_matches(&self, user: &User) -> bool {
        let username = user.username.clone();
        let password = user.password.clone();

        let result = self
            .with_conn(move |conn| {
                conn.query_row(PASSWORD_MATCHES, params![username, password], |row| {
                    row.get::<_, bool>(0)
                })
            })
            .await;

        result.unwrap_or_else(|e| {
            warn!("Password lookup for {} failed: {}", user.username, e);
            false
        })
    }
}
