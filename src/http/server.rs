//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both endpoints
//! - Wire up middleware (tracing, request timeout)
//! - Own the application state handlers read from
//! - Bind the server to a listener and serve until shutdown

use axum::{routing::post, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::audit::{AuditLog, NoopAudit};
use crate::config::AppConfig;
use crate::http::handlers;
use crate::outbound::{HttpTransport, OutboundError};
use crate::provider::OmdbClient;

/// Ceiling on inbound request handling, independent of the per-call
/// provider budgets.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<OmdbClient>,
    pub audit: Arc<dyn AuditLog>,
}

/// HTTP server for the movie proxy.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server from resolved configuration.
    ///
    /// Builds the shared outbound client exactly once here; nothing
    /// reconfigures it afterwards.
    pub fn new(config: AppConfig) -> Result<Self, OutboundError> {
        let transport = Arc::new(HttpTransport::new(Duration::from_secs(
            config.client_timeout_secs,
        ))?);
        let provider = Arc::new(OmdbClient::new(
            &config.provider_base_url,
            &config.api_key,
            transport,
        ));

        let state = AppState {
            provider,
            audit: Arc::new(NoopAudit),
        };

        Ok(Self {
            router: Self::build_router(state),
            config,
        })
    }

    /// Create a server around pre-built state; lets tests substitute the
    /// provider transport and audit backend.
    pub fn from_state(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
            config: AppConfig::default(),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/search", post(handlers::search))
            .route("/movie_by_id", post(handlers::movie_by_id))
            .with_state(state)
            .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
