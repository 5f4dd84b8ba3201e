//! HTTP routes

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use super::state::AppState;
use crate::middleware::log_requests;
use crate::protocol::{log_in, sign_up};

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/login", get(log_in).post(log_in))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}
