//! HTTP client for the admin search endpoint.
//!
//! The client is stateless apart from its connection pool: every search is a
//! single `GET {search_url}?q=<query>`.

use std::future::Future;

use reqwest::Url;

use crate::config::WidgetConfig;
use crate::endpoint::protocol::SearchResponse;
use crate::{Result, SearchError};

/// Source of search results.
///
/// Implemented by [`HttpEndpoint`] for the real admin site and by scripted
/// endpoints in tests.
pub trait ResultsEndpoint: Send + Sync + 'static {
    /// Run one search for `query`.
    ///
    /// # Errors
    /// Returns [`SearchError::RequestFailed`] on transport, status or parse failures.
    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResponse>> + Send;
}

/// Search endpoint reached over HTTP.
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl HttpEndpoint {
    /// Create a client for the endpoint described by `config`.
    ///
    /// # Errors
    /// Returns error if the configured URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &WidgetConfig) -> Result<Self> {
        let url = config.search_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SearchError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }

    /// URL searches are sent to (without the query string).
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ResultsEndpoint for HttpEndpoint {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        tracing::debug!("GET {} q={:?}", self.url, query);

        let response = self
            .client
            .get(self.url.clone())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(format!("Failed to reach {}: {}", self.url, e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::RequestFailed(format!("Failed to parse response: {}", e)))?;

        for error in &body.errors {
            tracing::warn!(
                "Backend skipped {}.{}: {}",
                error.app,
                error.model,
                error.error_message
            );
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn endpoint_for(base_url: String) -> HttpEndpoint {
        let config = WidgetConfig {
            base_url,
            ..WidgetConfig::default()
        };
        HttpEndpoint::new(&config).unwrap()
    }

    /// Echoes the decoded query back as the name of a single matched app.
    fn echo_router() -> Router {
        Router::new().route(
            "/admin/search/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let q = params.get("q").cloned().unwrap_or_default();
                Json(json!({
                    "results": {"apps": [{"id": "echo", "name": q, "url": null, "models": []}]},
                    "counts": {"apps": 1, "models": 0, "objects": 0},
                    "errors": [{
                        "error": "ValueError()",
                        "error_message": "broken",
                        "app": "teams",
                        "model": "Team"
                    }]
                }))
            }),
        )
    }

    #[test]
    fn test_endpoint_url_from_config() {
        let endpoint = endpoint_for("http://admin.local:9000".to_string());
        assert_eq!(endpoint.url().as_str(), "http://admin.local:9000/admin/search/");
    }

    #[tokio::test]
    async fn test_search_round_trip() {
        let endpoint = endpoint_for(serve(echo_router()).await);

        let response = endpoint.search("teams").await.unwrap();
        assert_eq!(response.results.apps[0].name, "teams");
        assert_eq!(response.counts.apps, 1);
        assert_eq!(response.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_query_is_url_encoded() {
        let endpoint = endpoint_for(serve(echo_router()).await);

        let response = endpoint.search("#,& ?=").await.unwrap();
        assert_eq!(response.results.apps[0].name, "#,& ?=");
    }

    #[tokio::test]
    async fn test_server_error_is_request_failure() {
        let router = Router::new().route(
            "/admin/search/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let endpoint = endpoint_for(serve(router).await);

        let err = endpoint.search("teams").await.unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_request_failure() {
        let router = Router::new().route("/admin/search/", get(|| async { "<html>login</html>" }));
        let endpoint = endpoint_for(serve(router).await);

        let err = endpoint.search("teams").await.unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = endpoint_for(format!("http://{}", addr));
        let err = endpoint.search("teams").await.unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed(_)));
    }
}
