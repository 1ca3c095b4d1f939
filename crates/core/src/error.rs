//! Unified error types for ambitscope.
//!
//! A company that cannot be found is not an error: the pipeline reports it
//! as an empty lookup.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the ambitscope pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty company name).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// HTTP client or transport failure.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// The data endpoint build token could not be discovered.
    ///
    /// Fatal: every later data fetch depends on it.
    #[error("VERSION_DISCOVERY_FAILED: {0}")]
    VersionDiscoveryFailed(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::VersionDiscoveryFailed(msg) => (-32013, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HttpError("connection refused".to_string());
        assert!(err.to_string().contains("HTTP_ERROR"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let err = Error::InvalidInput("company name cannot be empty".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32602);
    }

    #[test]
    fn test_version_discovery_code() {
        let err = Error::VersionDiscoveryFailed("no buildId".to_string());
        assert!(err.to_string().starts_with("VERSION_DISCOVERY_FAILED"));
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code.0, -32013);
    }
}
