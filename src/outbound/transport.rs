//! Shared HTTP client and the wire seam.
//!
//! # Responsibilities
//! - Hold the one process-wide `reqwest::Client`, timeout-configured at
//!   construction and never reconfigured
//! - Define the `Transport` trait the executor sends through, so tests can
//!   substitute spies and failure injectors for the real wire

use std::time::Duration;

use async_trait::async_trait;

use crate::outbound::error::{OutboundError, OutboundResult};

/// Seam between the executor and the network.
///
/// `Ok(None)` models a transport that produced neither a response nor an
/// error; the executor normalizes it so callers never see that state.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Client handle used by the request builder.
    fn client(&self) -> &reqwest::Client;

    /// Send a built request over the wire.
    async fn send(&self, request: reqwest::Request) -> OutboundResult<Option<reqwest::Response>>;
}

/// Production transport over a shared `reqwest::Client`.
///
/// Built once at startup from configuration and shared via `Arc`; the
/// client is read-only afterwards, so concurrent use needs no locking.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the shared client with the given request timeout.
    pub fn new(timeout: Duration) -> OutboundResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OutboundError::Transport(format!("failed to build client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    async fn send(&self, request: reqwest::Request) -> OutboundResult<Option<reqwest::Response>> {
        let response = self.client.execute(request).await?;
        Ok(Some(response))
    }
}
