//! Logging middleware
//!
//! Logs every HTTP request with its outcome.

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// Log method, path, status, and latency of each request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
