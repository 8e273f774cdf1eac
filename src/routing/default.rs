//! Terminal handler and the built-in documentation links.

use std::collections::HashMap;

use crate::routing::handler::{Handler, Outcome};

/// Body served when no layer of the chain recognizes a path.
pub const GREETING: &str = "Hello, world!\n";

/// Answers every path with [`GREETING`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingHandler;

impl Handler for GreetingHandler {
    fn resolve<'a>(&'a self, _path: &str) -> Outcome<'a> {
        Outcome::Content(GREETING)
    }
}

/// Redirects that are always active beneath any supplied rule file.
pub fn builtin_routes() -> HashMap<String, String> {
    [
        ("/urlshort-godoc", "https://godoc.org/github.com/gophercises/urlshort"),
        ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ]
    .into_iter()
    .map(|(path, url)| (path.to_string(), url.to_string()))
    .collect()
}
