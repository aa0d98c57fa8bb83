//! Executes request descriptors with an explicit per-call time budget.
//!
//! # Responsibilities
//! - Build the descriptor into a concrete request
//! - Bound the send with the caller's timeout
//! - Normalize the transport's nothing-at-all case into an explicit error

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::outbound::builder::build_request;
use crate::outbound::error::{OutboundError, OutboundResult};
use crate::outbound::request::ApiRequest;
use crate::outbound::transport::Transport;

/// Runs descriptors through a transport.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn Transport>,
}

impl RequestExecutor {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build and send a descriptor, bounded by `budget`.
    ///
    /// The shared client carries its own timeout as well; the shorter of
    /// the two effectively bounds the call. Build failures propagate
    /// unchanged and never reach the wire.
    pub async fn execute(
        &self,
        api: &ApiRequest,
        budget: Duration,
    ) -> OutboundResult<reqwest::Response> {
        let request = build_request(self.transport.client(), api)?;

        match timeout(budget, self.transport.send(request)).await {
            Ok(Ok(Some(response))) => Ok(response),
            Ok(Ok(None)) => Err(OutboundError::EmptyResponse),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(OutboundError::Timeout(budget.as_secs())),
        }
    }
}
