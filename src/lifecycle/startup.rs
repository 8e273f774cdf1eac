//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration, then apply CLI overrides
//! - Read rule files into raw payloads
//! - Build the handler chain before any socket is bound
//!
//! # Design Decisions
//! - Fail fast: a bad config file or rule payload is fatal
//! - An unreadable rule file is the same as not passing the flag

use std::path::Path;

use thiserror::Error;

use crate::cli::Cli;
use crate::config::{load_config, validate_config, ConfigError, ServerConfig};
use crate::routing::{build_chain, DecodeError, PayloadSources, SharedHandler};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load redirect rules: {0}")]
    Decode(#[from] DecodeError),
}

/// Read a rule file, treating any failure as "not supplied".
pub fn read_payload(path: Option<&Path>) -> Option<Vec<u8>> {
    let path = path?;
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable rule file");
            None
        }
    }
}

/// Resolve the server configuration from `--config` and `--bind`.
pub fn load_server_config(cli: &Cli) -> Result<ServerConfig, StartupError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

/// Build the top-level handler from the rule files named on the command line.
pub fn build_handler(cli: &Cli) -> Result<SharedHandler, StartupError> {
    let sources = PayloadSources {
        yaml: read_payload(cli.yaml.as_deref()),
        json: read_payload(cli.json.as_deref()),
    };
    Ok(build_chain(&sources)?)
}
