//! Persistent HTTP session for the review site.
//!
//! ### Browser-like requests
//! - One pooled `reqwest::Client` per process, reused for the version probe
//!   and every data request.
//! - Default headers: desktop Chrome `User-Agent`, `accept: */*`,
//!   `accept-language`, `cache-control: no-cache`.
//! - `accept-encoding` is negotiated by reqwest (gzip, br, zstd, deflate) so
//!   bodies are decoded transparently.
//!
//! ### Transport defaults
//! - No timeout override, no retries, default redirect policy.
//! - Non-success statuses are returned to the caller, not turned into errors.

pub mod url;

use ambitscope_core::{AppConfig, Error};
use bytes::Bytes;
use reqwest::{Client, StatusCode, Url, header};
use std::time::Instant;

pub use url::{UrlError, canonicalize, data_url, overview_page_url};

/// Headers for the shared session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Site base URL (default: https://www.ambitionbox.com)
    pub base_url: String,
    /// User agent string (default: desktop Chrome)
    pub user_agent: String,
    /// Accept-Language header
    pub accept_language: String,
}

impl From<&AppConfig> for SessionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.site_base_url.clone(),
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
        }
    }
}

/// Response from a session GET.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body bytes
    pub bytes: Bytes,
}

impl FetchResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// The process-wide connection to the review site.
#[derive(Debug, Clone)]
pub struct SiteSession {
    http: Client,
    base_url: Url,
}

impl SiteSession {
    /// Create a session with the browser header set.
    pub fn new(config: &SessionConfig) -> Result<Self, Error> {
        let base_url = canonicalize(&config.base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("*/*"));
        headers.insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-cache"));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_str(&config.accept_language)
                .map_err(|e| Error::InvalidInput(format!("invalid accept_language: {e}")))?,
        );

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .zstd(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// GET `url`, returning the body whatever the status.
    pub async fn get(&self, url: &Url) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| Error::HttpError(format!("network error: {}", e)))?;

        let status = response.status();
        let final_url = response.url().clone();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response: {}", e)))?;

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!("fetched {} -> {} [{}] in {}ms ({} bytes)", url, final_url, status, fetch_ms, bytes.len());

        Ok(FetchResponse { status, bytes })
    }

    /// Canonical site base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_from_app_config() {
        let config = SessionConfig::from(&AppConfig::default());
        assert_eq!(config.base_url, "https://www.ambitionbox.com");
        assert!(config.user_agent.contains("Chrome/128"));
        assert_eq!(config.accept_language, "en-GB,en-US;q=0.9,en;q=0.8");
    }

    #[test]
    fn test_session_new() {
        let session = SiteSession::new(&SessionConfig::from(&AppConfig::default())).unwrap();
        assert_eq!(session.base_url().as_str(), "https://www.ambitionbox.com/");
    }

    #[test]
    fn test_session_rejects_bad_base_url() {
        let config = SessionConfig { base_url: "ftp://example.com".into(), ..SessionConfig::from(&AppConfig::default()) };
        assert!(matches!(SiteSession::new(&config), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_response_text() {
        let response = FetchResponse { status: StatusCode::OK, bytes: Bytes::from_static(b"<html></html>") };
        assert_eq!(response.text(), "<html></html>");
    }
}
