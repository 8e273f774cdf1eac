//! Request ID propagation.
//!
//! # Responsibilities
//! - Reuse a client-supplied `x-request-id` or generate a UUID v4
//! - Make the ID visible to inner layers (trace spans)
//! - Echo the ID on the response
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn new_request_id() -> HeaderValue {
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}

/// Middleware that guarantees every request and response has an ID.
pub async fn propagate_request_id(mut request: Request, next: Next) -> Response {
    let id = match request.headers().get(&X_REQUEST_ID) {
        Some(existing) => existing.clone(),
        None => {
            let id = new_request_id();
            request.headers_mut().insert(X_REQUEST_ID, id.clone());
            id
        }
    };

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, id);
    response
}
