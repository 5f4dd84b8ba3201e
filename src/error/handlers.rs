//! Error handlers
//!
//! Logging and HTTP status mapping for workflow errors.

use axum::http::StatusCode;
use log::{error, info};

use crate::error::types::AccountError;

/// Log a workflow error at a level matching its severity
pub fn handle_error(route: &str, err: &AccountError) {
    match err {
        AccountError::Store(_) => error!("{} failed: {}", route, err),
        _ => info!("{} rejected: {}", route, err),
    }
}

/// Convert a workflow error to the HTTP status reported to the client
pub fn error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::EmptyUsername => StatusCode::BAD_REQUEST,
        AccountError::UsernameTooLong { .. } => StatusCode::BAD_REQUEST,
        AccountError::UsernameTaken(_) => StatusCode::BAD_REQUEST,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
