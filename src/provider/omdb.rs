//! OMDb provider adapter.
//!
//! # Responsibilities
//! - Know the provider's parameter names and response shapes
//! - Build GET descriptors and run them with a fixed per-call ceiling
//! - Decode responses into domain entities

use std::sync::Arc;
use std::time::Duration;

use crate::outbound::{ApiRequest, RequestExecutor, Transport};
use crate::provider::types::{Movie, ProviderError, ProviderResult, SearchResponse};

const PARAM_SEARCH: &str = "s";
const PARAM_ID: &str = "i";
const PARAM_PAGE: &str = "page";
const PARAM_API_KEY: &str = "apikey";

/// Per-call ceiling for provider requests, composed with any tighter
/// budget the shared client itself carries.
const PROVIDER_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for the OMDb-compatible movie-data provider.
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    executor: RequestExecutor,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            executor: RequestExecutor::new(transport),
        }
    }

    /// Search movies by term, optionally paginated.
    ///
    /// `page` is only sent when non-zero; the API key is always sent.
    pub async fn search_movies(&self, query: &str, page: u32) -> ProviderResult<Vec<Movie>> {
        let mut api = ApiRequest::get(&self.base_url).param(PARAM_API_KEY, &self.api_key);

        if !query.is_empty() {
            api = api.param(PARAM_SEARCH, query);
        }
        if page != 0 {
            api = api.param(PARAM_PAGE, page.to_string());
        }

        let response = self.executor.execute(&api, PROVIDER_TIMEOUT).await.map_err(|e| {
            tracing::warn!(query = %query, error = %e, "Movie search failed");
            e
        })?;

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        let result: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(result.search)
    }

    /// Look up one movie by provider identifier.
    ///
    /// An empty identifier is rejected before any network call.
    pub async fn get_movie_detail(&self, id: &str) -> ProviderResult<Movie> {
        if id.is_empty() {
            return Err(ProviderError::InvalidId);
        }

        let api = ApiRequest::get(&self.base_url)
            .param(PARAM_ID, id)
            .param(PARAM_API_KEY, &self.api_key);

        let response = self.executor.execute(&api, PROVIDER_TIMEOUT).await.map_err(|e| {
            tracing::warn!(id = %id, error = %e, "Movie detail lookup failed");
            e
        })?;

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        let movie: Movie =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(movie)
    }
}
