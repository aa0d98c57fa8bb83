//! Movie domain entities and provider error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outbound::OutboundError;

/// A single movie as returned by the provider.
///
/// Field names on the wire follow the provider's schema; entities are
/// created only by decoding provider responses and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "Type")]
    pub kind: String,

    #[serde(rename = "Poster")]
    pub poster: String,

    /// Provider identifier, unique within the provider's dataset.
    #[serde(rename = "imdbID")]
    pub id: String,
}

/// One page of search results from the provider.
///
/// Tolerant of missing fields: the provider omits both on an empty result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(rename = "Search")]
    pub search: Vec<Movie>,

    #[serde(rename = "totalResults")]
    pub total_results: String,
}

/// Errors surfaced by the provider adapter.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Identifier was empty; rejected before any network call.
    #[error("invalid ID")]
    InvalidId,

    /// Response body could not be read or parsed.
    #[error("decode error: {0}")]
    Decode(String),

    /// Request build or transport failure.
    #[error(transparent)]
    Outbound(#[from] OutboundError),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
