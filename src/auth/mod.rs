//! Account workflows
//!
//! Username normalization, sign-up, and log-in on top of a `CredentialStore`.

pub mod authentication;
pub mod credentials;
pub mod normalize;
pub mod registration;
pub mod results;

pub use authentication::log_in;
pub use credentials::User;
pub use normalize::normalize_username;
pub use registration::sign_up;
pub use results::{LoginResult, SignUpResult};
