//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `site_base_url` or `search_base_url` is not an http(s) URL
    /// - `user_agent`, `site_domain` or `reference_slug` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_http_url("site_base_url", &self.site_base_url)?;
        validate_http_url("search_base_url", &self.search_base_url)?;

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.site_domain.is_empty() {
            return Err(ConfigError::Invalid { field: "site_domain".into(), reason: "must not be empty".into() });
        }

        if self.reference_slug.is_empty() {
            return Err(ConfigError::Invalid { field: "reference_slug".into(), reason: "must not be empty".into() });
        }

        if self.search_api_key.is_some() != self.search_engine_id.is_some() {
            tracing::warn!(
                has_api_key = self.search_api_key.is_some(),
                has_engine_id = self.search_engine_id.is_some(),
                "Only one search secret is set; \
                 fuzzy lookups will fall back to exact slugs"
            );
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::Invalid { field: field.into(), reason: format!("not a valid URL: {e}") })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::Invalid { field: field.into(), reason: format!("unsupported scheme: {scheme}") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_site_url() {
        let config = AppConfig { site_base_url: "not a url".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "site_base_url"));
    }

    #[test]
    fn test_validate_unsupported_scheme() {
        let config = AppConfig { search_base_url: "ftp://example.com".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "search_base_url"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_empty_reference_slug() {
        let config = AppConfig { reference_slug: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "reference_slug"));
    }

    #[test]
    fn test_validate_half_credentials_is_only_a_warning() {
        let config = AppConfig { search_api_key: Some("key".into()), ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
