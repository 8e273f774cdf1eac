//! Structured redirect rules decoded from YAML or JSON.
//!
//! # Responsibilities
//! - Decode a payload into an ordered [`RuleSet`]
//! - Resolve a path against the rules (first match wins)
//! - Defer unmatched paths to the fallback handler
//!
//! # Design Decisions
//! - One router type for both formats; only the decode step differs
//! - Decoding is all-or-nothing: a bad payload never yields a router
//! - Duplicate paths are kept; source order breaks ties
//! - O(n) scan (rule files are small and read-only)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::handler::{Handler, Outcome, SharedHandler};

/// A single path-to-URL redirect instruction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedirectRule {
    /// Request path, compared byte for byte.
    pub path: String,
    /// Destination, passed through verbatim.
    pub url: String,
}

impl RedirectRule {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Payload encoding of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    fn decode(self, payload: &[u8]) -> Result<Vec<RedirectRule>, DecodeError> {
        let rules = match self {
            Format::Yaml => serde_yaml::from_slice(payload)?,
            Format::Json => serde_json::from_slice(payload)?,
        };
        Ok(rules)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => write!(f, "yaml"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Errors produced while decoding a rule payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The YAML payload is malformed or has the wrong shape.
    #[error("invalid YAML rules: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON payload is malformed or has the wrong shape.
    #[error("invalid JSON rules: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered redirect rules, in the order they appeared in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RedirectRule>,
}

impl RuleSet {
    /// Decode the whole payload, or fail without producing any rules.
    pub fn decode(payload: &[u8], format: Format) -> Result<Self, DecodeError> {
        format.decode(payload).map(Self::from)
    }

    /// Destination of the first rule whose path equals `path`.
    pub fn find(&self, path: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.path == path)
            .map(|rule| rule.url.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RedirectRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<RedirectRule>> for RuleSet {
    fn from(rules: Vec<RedirectRule>) -> Self {
        Self { rules }
    }
}

/// Redirects paths listed in a [`RuleSet`], deferring everything else.
#[derive(Debug)]
pub struct RuleRouter {
    rules: RuleSet,
    fallback: SharedHandler,
}

impl RuleRouter {
    /// Decode `payload` and wrap `fallback`.
    pub fn build(
        payload: &[u8],
        format: Format,
        fallback: SharedHandler,
    ) -> Result<Self, DecodeError> {
        let rules = RuleSet::decode(payload, format)?;
        Ok(Self::new(rules, fallback))
    }

    /// Wrap `fallback` with an already decoded rule set.
    pub fn new(rules: RuleSet, fallback: SharedHandler) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Handler for RuleRouter {
    fn resolve<'a>(&'a self, path: &str) -> Outcome<'a> {
        match self.rules.find(path) {
            Some(url) => Outcome::Redirect(url),
            None => self.fallback.resolve(path),
        }
    }
}
