//! Server core functionality
//!
//! Listener setup, shared request state, and the HTTP router.

pub mod core;
pub mod router;
pub mod state;

pub use self::core::Server;
pub use router::router;
pub use state::AppState;
