//! Fallback chain assembly.
//!
//! # Responsibilities
//! - Build the greeting → built-in map → rule file layering
//! - Pick at most one rule payload (YAML before JSON)
//! - Surface decode failures to startup, which treats them as fatal
//!
//! # Design Decisions
//! - Runs exactly once per process; the result is never rebuilt
//! - Empty payloads count as "not supplied"

use std::sync::Arc;

use crate::routing::default::{builtin_routes, GreetingHandler};
use crate::routing::exact::ExactMatchRouter;
use crate::routing::handler::SharedHandler;
use crate::routing::rules::{DecodeError, Format, RuleRouter};

/// Raw rule payloads handed over by startup.
#[derive(Debug, Clone, Default)]
pub struct PayloadSources {
    pub yaml: Option<Vec<u8>>,
    pub json: Option<Vec<u8>>,
}

impl PayloadSources {
    /// The payload that drives the rule layer, if any.
    pub fn selected(&self) -> Option<(Format, &[u8])> {
        non_empty(&self.yaml)
            .map(|b| (Format::Yaml, b))
            .or_else(|| non_empty(&self.json).map(|b| (Format::Json, b)))
    }
}

fn non_empty(payload: &Option<Vec<u8>>) -> Option<&[u8]> {
    payload.as_deref().filter(|bytes| !bytes.is_empty())
}

/// Compose the top-level handler for the server.
pub fn build_chain(sources: &PayloadSources) -> Result<SharedHandler, DecodeError> {
    let builtin: SharedHandler = Arc::new(ExactMatchRouter::new(
        builtin_routes(),
        Arc::new(GreetingHandler),
    ));

    let Some((format, payload)) = sources.selected() else {
        tracing::info!("No rule file supplied, serving built-in routes only");
        return Ok(builtin);
    };

    let router = RuleRouter::build(payload, format, builtin)?;
    tracing::info!(
        format = %format,
        rules = router.rules().len(),
        "Redirect rules loaded"
    );
    Ok(Arc::new(router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::default::GREETING;
    use crate::routing::handler::{Handler, Outcome};

    fn sources(yaml: Option<&str>, json: Option<&str>) -> PayloadSources {
        PayloadSources {
            yaml: yaml.map(|s| s.as_bytes().to_vec()),
            json: json.map(|s| s.as_bytes().to_vec()),
        }
    }

    #[test]
    fn test_builtin_routes_without_payloads() {
        let handler = build_chain(&PayloadSources::default()).unwrap();

        assert_eq!(
            handler.resolve("/yaml-godoc"),
            Outcome::Redirect("https://godoc.org/gopkg.in/yaml.v2")
        );
        assert_eq!(handler.resolve("/unknown"), Outcome::Content(GREETING));
    }

    #[test]
    fn test_yaml_overrides_builtin_route() {
        let yaml = "- path: /urlshort-godoc\n  url: https://override.example.com\n";
        let handler = build_chain(&sources(Some(yaml), None)).unwrap();

        assert_eq!(
            handler.resolve("/urlshort-godoc"),
            Outcome::Redirect("https://override.example.com")
        );
        // Built-in map and greeting remain underneath.
        assert_eq!(
            handler.resolve("/yaml-godoc"),
            Outcome::Redirect("https://godoc.org/gopkg.in/yaml.v2")
        );
        assert_eq!(handler.resolve("/unknown"), Outcome::Content(GREETING));
    }

    #[test]
    fn test_json_used_when_yaml_absent() {
        let json = r#"[{"path": "/gh", "url": "https://github.com"}]"#;
        let handler = build_chain(&sources(None, Some(json))).unwrap();

        assert_eq!(handler.resolve("/gh"), Outcome::Redirect("https://github.com"));
    }

    #[test]
    fn test_yaml_takes_precedence_over_json() {
        let yaml = "- path: /a\n  url: https://yaml.example\n";
        let json = r#"[{"path": "/a", "url": "https://json.example"}, {"path": "/b", "url": "https://json.example/b"}]"#;
        let handler = build_chain(&sources(Some(yaml), Some(json))).unwrap();

        assert_eq!(handler.resolve("/a"), Outcome::Redirect("https://yaml.example"));
        assert_eq!(handler.resolve("/b"), Outcome::Content(GREETING));
    }

    #[test]
    fn test_empty_yaml_falls_through_to_json() {
        let json = r#"[{"path": "/a", "url": "https://json.example"}]"#;
        let handler = build_chain(&sources(Some(""), Some(json))).unwrap();

        assert_eq!(handler.resolve("/a"), Outcome::Redirect("https://json.example"));
    }

    #[test]
    fn test_empty_payloads_mean_builtin_only() {
        let s = sources(Some(""), Some(""));
        assert!(s.selected().is_none());

        let handler = build_chain(&s).unwrap();
        assert_eq!(handler.resolve("/unknown"), Outcome::Content(GREETING));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = build_chain(&sources(None, Some("not valid json"))).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_invalid_yaml_is_not_masked_by_valid_json() {
        let json = r#"[{"path": "/a", "url": "https://json.example"}]"#;
        let err = build_chain(&sources(Some("just a scalar"), Some(json))).unwrap_err();
        assert!(matches!(err, DecodeError::Yaml(_)));
    }
}
