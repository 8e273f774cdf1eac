//! Exact-match redirects from a static path map.

use std::collections::HashMap;

use crate::routing::handler::{Handler, Outcome, SharedHandler};

/// Redirects paths found in a fixed map, deferring everything else.
///
/// Construction never fails; the map is frozen for the life of the router.
#[derive(Debug)]
pub struct ExactMatchRouter {
    routes: HashMap<String, String>,
    fallback: SharedHandler,
}

impl ExactMatchRouter {
    pub fn new(routes: HashMap<String, String>, fallback: SharedHandler) -> Self {
        Self { routes, fallback }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Handler for ExactMatchRouter {
    fn resolve<'a>(&'a self, path: &str) -> Outcome<'a> {
        match self.routes.get(path) {
            Some(url) => Outcome::Redirect(url.as_str()),
            None => self.fallback.resolve(path),
        }
    }
}
