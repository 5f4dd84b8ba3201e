//! HTTP transport
//!
//! Decodes request bodies into user records and maps workflow outcomes to
//! HTTP status codes.

pub mod handlers;
pub mod parser;

pub use handlers::{log_in, sign_up};
pub use parser::decode_user;
