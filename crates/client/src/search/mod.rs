//! Keyword search client (Google Custom Search JSON API).
//!
//! Used only for fuzzy company name resolution.
//!
//! ### Behavior
//!
//! - **Endpoint**: `https://customsearch.googleapis.com/customsearch/v1`
//! - **Authentication**: `key` and `cx` query parameters.
//! - **No retries**: a failed search is reported once and the resolver
//!   falls back to the exact slug.
//! - **Normalization**: Converts the API response into a stable `SearchResponse`.

pub mod error;
pub mod request;
pub mod response;

pub use error::SearchError;
pub use request::SearchRequest;
pub use response::{SearchResponse, SearchResult};

use ambitscope_core::{AppConfig, SearchCredentials};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Anything that can answer "what is the top link for this query".
#[async_trait]
pub trait KeywordSearch: Send + Sync {
    /// Link of the first result for `query`, if any.
    async fn first_link(&self, query: &str) -> Result<Option<String>, SearchError>;
}

/// Search collaborator used when no credentials are configured.
///
/// Always finds nothing, so fuzzy lookups use the exact slug.
#[derive(Debug, Clone, Default)]
pub struct NoSearch;

#[async_trait]
impl KeywordSearch for NoSearch {
    async fn first_link(&self, _query: &str) -> Result<Option<String>, SearchError> {
        Ok(None)
    }
}

/// Custom Search client configuration.
#[derive(Clone)]
pub struct SearchConfig {
    pub credentials: SearchCredentials,
    /// Endpoint (default: https://customsearch.googleapis.com/customsearch/v1).
    pub base_url: String,
}

impl SearchConfig {
    /// Take the endpoint and secrets from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SearchError> {
        let credentials =
            config.search_credentials().map_err(|e| SearchError::MissingCredentials(e.to_string()))?;

        Ok(Self { credentials, base_url: config.search_base_url.clone() })
    }
}

/// Custom Search API client.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    /// Create a new search client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        if config.credentials.api_key.is_empty() || config.credentials.engine_id.is_empty() {
            return Err(SearchError::MissingCredentials("search_api_key / search_engine_id".to_string()));
        }

        let http = reqwest::Client::builder().build().map_err(|e| SearchError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// Build a single-result request for `query`.
    pub fn first_result_request(&self, query: &str) -> SearchRequest {
        SearchRequest {
            key: self.config.credentials.api_key.clone(),
            cx: self.config.credentials.engine_id.clone(),
            q: query.to_string(),
            start: Some(1),
            num: Some(1),
        }
    }

    /// Execute a search query.
    pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse, SearchError> {
        req.validate()?;

        let start = Instant::now();

        tracing::debug!("searching Custom Search API: query={}", req.q);

        let http_response = self
            .http
            .get(&self.config.base_url)
            .header("Accept", "application/json")
            .query(&req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Custom Search API response status: {}", status);

        if status == 401 || status == 403 {
            return Err(SearchError::AuthError);
        }

        if status == 429 {
            return Err(SearchError::RateLimited);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(SearchError::HttpError { status: status.as_u16() });
        }

        let bytes = http_response.bytes().await?;
        let api_response: response::CseApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| SearchError::Parse(e.to_string()))?;

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), api_response.items.len());

        Ok(SearchResponse::from(api_response))
    }
}

#[async_trait]
impl KeywordSearch for SearchClient {
    async fn first_link(&self, query: &str) -> Result<Option<String>, SearchError> {
        let response = self.search(self.first_result_request(query)).await?;
        let top = response.top();

        if let Some(hit) = top {
            tracing::debug!(title = %hit.title, link = %hit.link, "top search hit");
        }

        Ok(top.map(|hit| hit.link.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SearchConfig {
        SearchConfig {
            credentials: SearchCredentials { api_key: "key".into(), engine_id: "cx".into() },
            base_url: "https://customsearch.googleapis.com/customsearch/v1".into(),
        }
    }

    #[test]
    fn test_client_new_missing_key() {
        let mut config = config();
        config.credentials.api_key = String::new();
        assert!(matches!(SearchClient::new(config), Err(SearchError::MissingCredentials(_))));
    }

    #[test]
    fn test_first_result_request() {
        let client = SearchClient::new(config()).unwrap();
        let req = client.first_result_request("site:ambitionbox.com infosys");
        assert_eq!(req.num, Some(1));
        assert_eq!(req.start, Some(1));
        assert_eq!(req.cx, "cx");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_config_from_app_config_without_secrets() {
        let result = SearchConfig::from_app_config(&AppConfig::default());
        assert!(matches!(result, Err(SearchError::MissingCredentials(_))));
    }

    #[tokio::test]
    async fn test_no_search_finds_nothing() {
        let result = NoSearch.first_link("site:ambitionbox.com acme").await;
        assert!(matches!(result, Ok(None)));
    }
}
