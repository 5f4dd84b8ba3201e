//! User credential record
//!
//! The single record type shared by the HTTP surface, the workflows, and the
//! credential store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A username/password pair.
///
/// Decoded from `{"name": ..., "password": ...}`. Missing fields decode as
/// empty strings.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "name")]
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Passwords are stored in plaintext; keep them out of logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
