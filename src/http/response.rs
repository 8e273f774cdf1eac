//! Converting routing outcomes into HTTP responses.
//!
//! # Design Decisions
//! - Redirects are always 301 with the destination copied into `Location`
//! - Content is served as UTF-8 plain text with 200
//! - A destination that cannot be a header value answers 500

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::routing::Outcome;

impl IntoResponse for Outcome<'_> {
    fn into_response(self) -> Response {
        match self {
            Outcome::Redirect(url) => match HeaderValue::from_str(url) {
                Ok(location) => {
                    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
                }
                Err(_) => {
                    tracing::warn!(url = %url, "Redirect destination is not a valid Location header");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Outcome::Content(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body.to_owned(),
            )
                .into_response(),
        }
    }
}
