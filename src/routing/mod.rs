//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → rules.rs   (YAML/JSON rule set, first match wins)
//!     → exact.rs   (built-in path map)
//!     → default.rs (greeting responder)
//!     → Return: Outcome (redirect or content)
//!
//! Chain Compilation (at startup):
//!     payload bytes (YAML, else JSON, else none)
//!     → decode into RuleSet (all-or-nothing)
//!     → wrap built-in map, which wraps the greeting
//!     → Freeze as immutable Arc<dyn Handler>
//! ```
//!
//! # Design Decisions
//! - Handlers compiled at startup, immutable at runtime
//! - Exact string comparison only (no prefixes, no normalization)
//! - Deterministic: same path always resolves to the same outcome
//! - An unresolved path always defers to the next handler

pub mod chain;
pub mod default;
pub mod exact;
pub mod handler;
pub mod rules;

pub use chain::{build_chain, PayloadSources};
pub use default::{builtin_routes, GreetingHandler, GREETING};
pub use exact::ExactMatchRouter;
pub use handler::{Handler, Outcome, SharedHandler};
pub use rules::{DecodeError, Format, RedirectRule, RuleRouter, RuleSet};
