//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → TraceLayer spans per HTTP request (http::server)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - No metrics endpoint

pub mod logging;
