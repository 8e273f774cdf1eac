//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router whose only route is the redirect fallback
//! - Wire up middleware (tracing, request ID, timeout)
//! - Bind server to listener
//! - Dispatch every request path to the routing chain
//! - Stop accepting connections on shutdown

use axum::{
    body::Body,
    extract::State,
    http::{Request, Uri},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id, X_REQUEST_ID};
use crate::routing::{Handler, SharedHandler};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub handler: SharedHandler,
}

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `handler`.
    pub fn new(config: ServerConfig, handler: SharedHandler) -> Self {
        let state = AppState { handler };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(redirect_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(&X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(middleware::from_fn(propagate_request_id))
    }

    /// A clone of the fully layered router, for driving it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Resolve the request path through the chain.
/// The query string never takes part in matching.
async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let outcome = state.handler.resolve(uri.path());
    tracing::debug!(path = %uri.path(), outcome = ?outcome, "Path resolved");
    outcome.into_response()
}
