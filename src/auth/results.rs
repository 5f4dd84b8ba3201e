//! Account workflow result types
//!
//! Defines result structures returned by the sign-up and log-in workflows.

/// Result of a successful sign-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpResult {
    /// Canonical username as stored
    pub username: String,
}

/// Result of a successful log-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub username: String,
}
