//! Data endpoint build token discovery.
//!
//! The site is a Next.js app: every server-rendered page embeds its page
//! state in `<script id="__NEXT_DATA__">`, including the `buildId` that
//! versions the `/_next/data/<buildId>/...` JSON routes. The token is read
//! once from a known overview page and reused for the process lifetime.

use ambitscope_core::Error;
use scraper::{Html, Selector};
use serde::Serialize;
use std::fmt;

use crate::fetch::{SiteSession, overview_page_url};

/// Opaque build identifier of the site's data routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(token: impl Into<String>) -> Self {
        VersionToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pull `buildId` out of the `__NEXT_DATA__` block of a rendered page.
pub fn find_build_id(html: &str) -> Result<VersionToken, Error> {
    let selector = Selector::parse("script#__NEXT_DATA__")
        .map_err(|e| Error::VersionDiscoveryFailed(format!("invalid selector: {e}")))?;

    let document = Html::parse_document(html);
    let Some(script) = document.select(&selector).next() else {
        return Err(Error::VersionDiscoveryFailed("no __NEXT_DATA__ block on reference page".into()));
    };

    let payload: serde_json::Value = serde_json::from_str(&script.text().collect::<String>())
        .map_err(|e| Error::VersionDiscoveryFailed(format!("__NEXT_DATA__ is not valid JSON: {e}")))?;

    match payload.get("buildId").and_then(|v| v.as_str()) {
        Some(token) if !token.is_empty() => Ok(VersionToken::new(token)),
        _ => Err(Error::VersionDiscoveryFailed("__NEXT_DATA__ has no buildId".into())),
    }
}

/// Fetch the overview page of `reference_slug` and read its build token.
///
/// # Errors
///
/// Every failure is reported as `Error::VersionDiscoveryFailed`; nothing
/// downstream can run without the token.
pub async fn discover_version(session: &SiteSession, reference_slug: &str) -> Result<VersionToken, Error> {
    let url = overview_page_url(session.base_url(), reference_slug)
        .map_err(|e| Error::VersionDiscoveryFailed(e.to_string()))?;

    let result = match session.get(&url).await {
        Ok(response) if response.status.is_success() => find_build_id(&response.text()),
        Ok(response) => Err(Error::VersionDiscoveryFailed(format!("{url} returned {}", response.status))),
        Err(e) => Err(Error::VersionDiscoveryFailed(format!("{url} unreachable: {e}"))),
    };

    match &result {
        Ok(token) => tracing::info!(%token, "discovered data endpoint version"),
        Err(e) => tracing::error!(error = %e, "build version discovery failed"),
    }

    result
}
