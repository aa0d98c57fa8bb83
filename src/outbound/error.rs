//! Outbound request error definitions.

use thiserror::Error;

/// Errors that can occur while building or executing an outbound request.
#[derive(Debug, Error)]
pub enum OutboundError {
    /// URL was empty or failed to parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Method is not one of GET, POST, PUT, DELETE.
    #[error("unsupported method {0}")]
    UnsupportedMethod(String),

    /// The transport produced neither a response nor an error.
    #[error("empty response from transport")]
    EmptyResponse,

    /// The per-call deadline elapsed before a response arrived.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Network or HTTP-level failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for OutboundError {
    fn from(e: reqwest::Error) -> Self {
        OutboundError::Transport(e.to_string())
    }
}

/// Result type for outbound operations.
pub type OutboundResult<T> = Result<T, OutboundError>;
