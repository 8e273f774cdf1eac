//! The handler contract shared by every routing layer.

use std::fmt::Debug;
use std::sync::Arc;

/// What a handler decided to do with a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// Permanent redirect (301) to the given destination.
    Redirect(&'a str),
    /// Plain-text body served with 200 OK.
    Content(&'a str),
}

/// Resolves a request path to an [`Outcome`].
///
/// Implementations are immutable once built and are shared across every
/// request task, so resolution must not block or mutate anything.
pub trait Handler: Send + Sync + Debug {
    /// Resolve the raw request path (query string excluded).
    fn resolve<'a>(&'a self, path: &str) -> Outcome<'a>;
}

/// A handler shared between layers of the chain and the HTTP server.
pub type SharedHandler = Arc<dyn Handler>;

