//! Credential storage
//!
//! The `CredentialStore` capability and its implementations: SQLite for the
//! running server and an in-memory store for tests.

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::InMemoryCredentialStore;
pub use sqlite::SqliteCredentialStore;
pub use store::CredentialStore;
