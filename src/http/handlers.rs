//! Fan-out request handlers.
//!
//! Each handler runs exactly two units of work concurrently: the provider
//! call that produces the response, and a best-effort audit write. Both
//! are joined before the response is inspected; neither cancels the
//! other, and the audit outcome never reaches the caller.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::Deserialize;

use crate::audit::LogKind;
use crate::http::server::AppState;

/// Form input for `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub search: String,
    pub page: String,
}

/// Form input for `POST /movie_by_id`.
#[derive(Debug, Deserialize)]
pub struct DetailForm {
    pub id: String,
}

/// `POST /search` — proxy a movie search.
///
/// Failures surface the underlying error text.
pub async fn search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    let page: u32 = match form.page.parse() {
        Ok(p) => p,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let (primary, audit) = tokio::join!(
        state.provider.search_movies(&form.search, page),
        state
            .audit
            .save_log(LogKind::Debug, "user hit search", Utc::now()),
    );

    // Audit outcome is discarded by design.
    if let Err(e) = audit {
        tracing::warn!(error = %e, "Audit write failed");
    }

    match primary {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

/// `POST /movie_by_id` — proxy a movie detail lookup.
///
/// All failures collapse to a generic not-found message so provider
/// internals never leak through single-item lookups.
pub async fn movie_by_id(State(state): State<AppState>, Form(form): Form<DetailForm>) -> Response {
    let (primary, audit) = tokio::join!(
        state.provider.get_movie_detail(&form.id),
        state
            .audit
            .save_log(LogKind::Debug, "user hit movie_by_id", Utc::now()),
    );

    // Audit outcome is discarded by design.
    if let Err(e) = audit {
        tracing::warn!(error = %e, "Audit write failed");
    }

    match primary {
        Ok(movie) => Json(movie).into_response(),
        Err(e) => {
            tracing::debug!(id = %form.id, error = %e, "Detail lookup failed");
            (StatusCode::BAD_REQUEST, "Movie not found").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditError, AuditLog, MemoryAudit};
    use crate::outbound::{OutboundResult, Transport};
    use crate::provider::OmdbClient;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;

    struct CannedTransport {
        client: reqwest::Client,
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        fn client(&self) -> &reqwest::Client {
            &self.client
        }

        async fn send(
            &self,
            _request: reqwest::Request,
        ) -> OutboundResult<Option<reqwest::Response>> {
            let response = http::Response::builder()
                .status(self.status)
                .body(self.body.to_string())
                .unwrap();
            Ok(Some(reqwest::Response::from(response)))
        }
    }

    /// Audit backend that always fails, to prove handler isolation.
    struct FailingAudit;

    #[async_trait]
    impl AuditLog for FailingAudit {
        async fn save_log(
            &self,
            _kind: LogKind,
            _message: &str,
            _timestamp: DateTime<Utc>,
        ) -> Result<(), AuditError> {
            Err(AuditError::Backend("log store down".to_string()))
        }
    }

    const SEARCH_BODY: &str = r#"{"Search":[{"Title":"Batman","Year":"1989","Type":"movie","Poster":"p.jpg","imdbID":"tt0096895"}],"totalResults":"1"}"#;

    fn state_with(body: &'static str, audit: Arc<dyn AuditLog>) -> AppState {
        let transport = Arc::new(CannedTransport {
            client: reqwest::Client::new(),
            status: 200,
            body,
        });
        AppState {
            provider: Arc::new(OmdbClient::new("http://provider.test/", "key", transport)),
            audit,
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_search_happy_path() {
        let audit = Arc::new(MemoryAudit::new());
        let state = state_with(SEARCH_BODY, audit.clone());

        let response = search(
            State(state),
            Form(SearchForm {
                search: "batman".to_string(),
                page: "2".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("tt0096895"));

        let entries = audit.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, LogKind::Debug);
        assert_eq!(entries[0].message, "user hit search");
    }

    #[tokio::test]
    async fn test_search_rejects_malformed_page() {
        let audit = Arc::new(MemoryAudit::new());
        let state = state_with(SEARCH_BODY, audit.clone());

        let response = search(
            State(state),
            Form(SearchForm {
                search: "batman".to_string(),
                page: "two".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Rejected before any work: no audit entry either.
        assert!(audit.entries().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_survives_audit_failure() {
        let state = state_with(SEARCH_BODY, Arc::new(FailingAudit));

        let response = search(
            State(state),
            Form(SearchForm {
                search: "batman".to_string(),
                page: "1".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Batman"));
        assert!(!body.contains("log store down"));
    }

    #[tokio::test]
    async fn test_search_surfaces_error_text() {
        let state = state_with("not json", Arc::new(MemoryAudit::new()));

        let response = search(
            State(state),
            Form(SearchForm {
                search: "batman".to_string(),
                page: "1".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_text(response).await;
        assert!(body.contains("decode error"));
    }

    #[tokio::test]
    async fn test_detail_happy_path() {
        let body = r#"{"Title":"Batman","Year":"1989","Type":"movie","Poster":"p.jpg","imdbID":"tt0096895"}"#;
        let audit = Arc::new(MemoryAudit::new());
        let state = state_with(body, audit.clone());

        let response = movie_by_id(
            State(state),
            Form(DetailForm {
                id: "tt0096895".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let text = body_text(response).await;
        assert!(text.contains("\"imdbID\":\"tt0096895\""));
        assert_eq!(audit.entries().await[0].message, "user hit movie_by_id");
    }

    #[tokio::test]
    async fn test_detail_failure_is_genericized() {
        // Error-shaped provider body: decoding fails, caller only sees the
        // generic message.
        let state = state_with(
            r#"{"Response":"False","Error":"Movie not found!"}"#,
            Arc::new(MemoryAudit::new()),
        );

        let response = movie_by_id(
            State(state),
            Form(DetailForm {
                id: "tt0000000".to_string(),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Movie not found");
    }

    #[tokio::test]
    async fn test_detail_empty_id_is_genericized() {
        let audit = Arc::new(MemoryAudit::new());
        let state = state_with(SEARCH_BODY, audit.clone());

        let response = movie_by_id(
            State(state),
            Form(DetailForm { id: String::new() }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Movie not found");
        // The audit write still runs and completes.
        assert_eq!(audit.entries().await.len(), 1);
    }
}
