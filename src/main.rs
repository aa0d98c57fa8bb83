//! Movie Proxy
//!
//! A movie-search proxy built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 MOVIE PROXY                   │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐      ┌───────────────────────┐  │
//!   ─────────────────┼─▶│  http   │──┬──▶│ provider (OMDb client) │──┼──▶ Provider
//!                    │  │ server  │  │   └───────────┬───────────┘  │
//!                    │  └─────────┘  │               ▼               │
//!                    │               │   ┌───────────────────────┐  │
//!                    │               │   │ outbound (descriptor, │  │
//!                    │               │   │ builder, executor,    │  │
//!                    │               │   │ shared client)        │  │
//!                    │               │   └───────────────────────┘  │
//!                    │               │                               │
//!                    │               └──▶┌───────────────────────┐  │
//!   Client Response  │      joined      │ audit (best-effort log)│  │
//!   ◀────────────────┼──────────────────└───────────────────────┘  │
//!                    │                                               │
//!                    │  config (env, resolved once) · tracing        │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Each handler fans out to the provider call and the audit write
//! concurrently, joins both, and answers with the provider outcome.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_proxy::config::AppConfig;
use movie_proxy::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("movie-proxy v0.1.0 starting");

    let config = AppConfig::from_env()?;

    tracing::info!(
        bind_address = %config.bind_address,
        client_timeout_secs = config.client_timeout_secs,
        provider_base_url = %config.provider_base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
