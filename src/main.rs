//! URL redirect server.
//!
//! Maps request paths to destination URLs with permanent redirects.
//!
//! # Architecture Overview
//!
//! ```text
//!     --yaml / --json                    ┌──────────────────────────────┐
//!     ─────────────────▶ startup ───────▶│ RuleRouter (YAML or JSON)     │
//!                                        │   └▶ ExactMatchRouter (docs)  │
//!                                        │        └▶ GreetingHandler     │
//!                                        └──────────────┬───────────────┘
//!                                                       │ Arc<dyn Handler>
//!     Client Request    ┌─────────┐   ┌──────────────┐  │
//!     ─────────────────▶│ request │──▶│ http server  │◀─┘
//!                       │   id    │   │  (fallback)  │
//!     ◀─────────────────│ + trace │◀──│ 301 / 200    │
//!     Client Response   └─────────┘   └──────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::lifecycle::{self, Shutdown};
use urlshort::observability::logging;
use urlshort::{Cli, HttpServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = lifecycle::load_server_config(&cli)?;
    logging::init(&config.observability);

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let handler = match lifecycle::build_handler(&cli) {
        Ok(handler) => handler,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let _signals = shutdown.trigger_on_signal();

    let server = HttpServer::new(config, handler);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
