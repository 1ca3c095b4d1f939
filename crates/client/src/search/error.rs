//! Keyword search client error types.

use std::sync::Arc;

/// Errors from the Custom Search client.
///
/// These never leave the resolver: any of them means "fall back to the
/// exact slug".
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// API key or engine id not configured.
    #[error("missing search credentials: {0}")]
    MissingCredentials(String),

    /// Invalid search query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Invalid num parameter (must be 1-10).
    #[error("invalid num: must be 1-10")]
    InvalidNum,

    /// Invalid start parameter (must be 1-91).
    #[error("invalid start: must be 1-91")]
    InvalidStart,

    /// Authentication failed (invalid key or engine id).
    #[error("authentication failed: invalid API key or engine id")]
    AuthError,

    /// Daily quota or rate limit exhausted.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { SearchError::Timeout } else { SearchError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::MissingCredentials("search_api_key".to_string());
        assert!(err.to_string().contains("credentials"));

        let err = SearchError::HttpError { status: 500 };
        assert_eq!(err.to_string(), "HTTP error: 500");
    }
}
