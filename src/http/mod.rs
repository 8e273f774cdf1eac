//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (attach request ID)
//!     → routing chain resolves the path to an Outcome
//!     → response.rs (301 + Location, or 200 text)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{propagate_request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
