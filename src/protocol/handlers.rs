//! Request handlers for `/signup` and `/login`.
//!
//! Handlers stay thin: decode the body, run the workflow against the injected
//! store, and turn the outcome into a status code. Neither route returns a body.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use log::info;

use super::parser::decode_user;
use crate::auth;
use crate::error::{error_to_status, handle_error};
use crate::server::AppState;

const SIGNUP_ROUTE: &str = "/signup";
const LOGIN_ROUTE: &str = "/login";

/// `POST /signup`
pub async fn sign_up(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let user = decode_user(SIGNUP_ROUTE, &body);

    match auth::sign_up(state.store.as_ref(), user, &state.config).await {
        Ok(result) => {
            info!("Sign-up succeeded for {}", result.username);
            StatusCode::OK
        }
        Err(e) => {
            handle_error(SIGNUP_ROUTE, &e);
            error_to_status(&e)
        }
    }
}

/// `GET|POST /login`
pub async fn log_in(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let user = decode_user(LOGIN_ROUTE, &body);

    match auth::log_in(state.store.as_ref(), user, &state.config).await {
        Ok(result) => {
            info!("User {} logged in", result.username);
            StatusCode::OK
        }
        Err(e) => {
            handle_error(LOGIN_ROUTE, &e);
            error_to_status(&e)
        }
    }
}
