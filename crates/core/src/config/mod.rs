//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (AMBITSCOPE_*)
//! 2. The bare `GS_KEY` / `GS_CX` search secrets
//! 3. TOML config file (if AMBITSCOPE_CONFIG_FILE set)
//! 4. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Desktop Chrome user agent sent with every site request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (AMBITSCOPE_*)
/// 2. `GS_KEY` / `GS_CX`
/// 3. TOML file (if AMBITSCOPE_CONFIG_FILE set)
/// 4. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Custom Search API key used for fuzzy resolution.
    ///
    /// Set via AMBITSCOPE_SEARCH_API_KEY or GS_KEY.
    #[serde(default)]
    pub search_api_key: Option<String>,

    /// Custom Search engine identifier (`cx`).
    ///
    /// Set via AMBITSCOPE_SEARCH_ENGINE_ID or GS_CX.
    #[serde(default)]
    pub search_engine_id: Option<String>,

    /// Custom Search endpoint.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Base URL of the review site.
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// Domain used in the `site:` search restriction.
    #[serde(default = "default_site_domain")]
    pub site_domain: String,

    /// Company whose overview page is fetched to discover the build token.
    #[serde(default = "default_reference_slug")]
    pub reference_slug: String,

    /// User-Agent string for site requests.
    ///
    /// Set via AMBITSCOPE_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept-Language header for site requests.
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
}

/// Both search secrets, present together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

fn default_search_base_url() -> String {
    "https://customsearch.googleapis.com/customsearch/v1".into()
}

fn default_site_base_url() -> String {
    "https://www.ambitionbox.com".into()
}

fn default_site_domain() -> String {
    "ambitionbox.com".into()
}

fn default_reference_slug() -> String {
    "google".into()
}

fn default_user_agent() -> String {
    BROWSER_USER_AGENT.into()
}

fn default_accept_language() -> String {
    "en-GB,en-US;q=0.9,en;q=0.8".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_api_key: None,
            search_engine_id: None,
            search_base_url: default_search_base_url(),
            site_base_url: default_site_base_url(),
            site_domain: default_site_domain(),
            reference_slug: default_reference_slug(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
        }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("AMBITSCOPE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment
            .merge(Env::raw().only(&["GS_KEY", "GS_CX"]).map(|key| {
                if key.as_str().eq_ignore_ascii_case("GS_KEY") {
                    "search_api_key".into()
                } else {
                    "search_engine_id".into()
                }
            }))
            .merge(
                Env::prefixed("AMBITSCOPE_")
                    .ignore(&["CONFIG_FILE"])
                    .map(|key| key.as_str().to_lowercase().into())
                    .split("__"),
            );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Both search secrets, or the reason fuzzy resolution cannot search.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent secret.
    pub fn search_credentials(&self) -> Result<SearchCredentials, ConfigError> {
        let api_key = self.search_api_key.clone().filter(|k| !k.is_empty()).ok_or_else(|| ConfigError::Missing {
            field: "search_api_key".into(),
            hint: "Set GS_KEY or AMBITSCOPE_SEARCH_API_KEY".into(),
        })?;
        let engine_id =
            self.search_engine_id.clone().filter(|c| !c.is_empty()).ok_or_else(|| ConfigError::Missing {
                field: "search_engine_id".into(),
                hint: "Set GS_CX or AMBITSCOPE_SEARCH_ENGINE_ID".into(),
            })?;

        Ok(SearchCredentials { api_key, engine_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.site_base_url, "https://www.ambitionbox.com");
        assert_eq!(config.site_domain, "ambitionbox.com");
        assert_eq!(config.reference_slug, "google");
        assert_eq!(config.user_agent, BROWSER_USER_AGENT);
        assert_eq!(config.accept_language, "en-GB,en-US;q=0.9,en;q=0.8");
        assert!(config.search_api_key.is_none());
        assert!(config.search_engine_id.is_none());
    }

    #[test]
    fn test_search_credentials_missing() {
        let config = AppConfig { search_api_key: Some("key".into()), ..Default::default() };
        let result = config.search_credentials();
        assert!(matches!(result, Err(ConfigError::Missing { field, .. }) if field == "search_engine_id"));
    }

    #[test]
    fn test_search_credentials_empty_key_counts_as_missing() {
        let config =
            AppConfig { search_api_key: Some(String::new()), search_engine_id: Some("cx".into()), ..Default::default() };
        let result = config.search_credentials();
        assert!(matches!(result, Err(ConfigError::Missing { field, .. }) if field == "search_api_key"));
    }

    #[test]
    fn test_search_credentials_present() {
        let config =
            AppConfig { search_api_key: Some("key".into()), search_engine_id: Some("cx".into()), ..Default::default() };
        let creds = config.search_credentials().unwrap();
        assert_eq!(creds, SearchCredentials { api_key: "key".into(), engine_id: "cx".into() });
    }
}
