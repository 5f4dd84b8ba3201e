//! Server middleware
//!
//! Request logging for the HTTP router.

pub mod logging;

pub use logging::log_requests;
