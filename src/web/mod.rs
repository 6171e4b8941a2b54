// Web server: Axum backend exposing the single /validate route.
//
// All request state is read-only and shared through Arc, so handlers run
// concurrently without locks. Anything other than /validate falls through
// to axum's default 404.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::any;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::censor::CommentValidator;
use crate::config::Config;

pub mod error;
pub mod handlers;
pub mod request_id;

use request_id::{RequestIdSource, UuidRequestIds};

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<CommentValidator>,
    pub request_ids: Arc<dyn RequestIdSource>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// State with random UUID correlation IDs.
    pub fn new(validator: CommentValidator, max_body_bytes: usize) -> Self {
        Self {
            validator: Arc::new(validator),
            request_ids: Arc::new(UuidRequestIds),
            max_body_bytes,
        }
    }

    /// Replace the correlation ID source (tests use a deterministic one).
    pub fn with_request_ids(mut self, source: Arc<dyn RequestIdSource>) -> Self {
        self.request_ids = source;
        self
    }
}

/// Start the Axum web server and block until it exits.
///
/// A bind failure is returned to the caller; everything after that is
/// handled per request. Ctrl-C stops accepting and drains in-flight requests.
pub async fn run_server(config: &Config, validator: CommentValidator) -> Result<()> {
    let state = AppState::new(validator, config.max_body_bytes);
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Censorship service listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    info!("Censorship service stopped");
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/validate", any(handlers::validate::validate_comment))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
