//! URL canonicalization and site endpoint construction.

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Canonicalize a site base URL.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing
/// 3. Lowercase the host
/// 4. Remove fragment (#...) and query
pub fn canonicalize(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") { trimmed.to_string() } else { format!("https://{trimmed}") };

    let mut parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    if let Some(host) = parsed.host_str() {
        let host = host.to_lowercase();
        parsed.set_host(Some(&host)).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    }

    parsed.set_fragment(None);
    parsed.set_query(None);

    Ok(parsed)
}

/// Append path segments to `base`, percent-encoding each one.
fn join_segments(base: &url::Url, segments: &[&str]) -> Result<url::Url, UrlError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UrlError::InvalidUrl(format!("{base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// `<base>/overview/<slug>-overview`, the human-facing overview page.
pub fn overview_page_url(base: &url::Url, slug: &str) -> Result<url::Url, UrlError> {
    join_segments(base, &["overview", &format!("{slug}-overview")])
}

/// `<base>/_next/data/<version>/overview/<slug>-overview.json`.
pub fn data_url(base: &url::Url, version: &str, slug: &str) -> Result<url::Url, UrlError> {
    join_segments(base, &["_next", "data", version, "overview", &format!("{slug}-overview.json")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_basic() {
        let url = canonicalize("https://www.ambitionbox.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.ambitionbox.com"));
    }

    #[test]
    fn test_canonicalize_default_scheme() {
        let url = canonicalize("www.ambitionbox.com").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_canonicalize_lowercase_host() {
        let url = canonicalize("https://WWW.AmbitionBox.com").unwrap();
        assert_eq!(url.host_str(), Some("www.ambitionbox.com"));
    }

    #[test]
    fn test_canonicalize_strips_query_and_fragment() {
        let url = canonicalize("https://example.com/?a=1#section").unwrap();
        assert_eq!(url.fragment(), None);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_canonicalize_unsupported_scheme() {
        let result = canonicalize("file:///etc/passwd");
        assert!(matches!(result, Err(UrlError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_canonicalize_empty() {
        assert!(matches!(canonicalize("   "), Err(UrlError::Empty)));
    }

    #[test]
    fn test_data_url() {
        let base = canonicalize("https://www.ambitionbox.com").unwrap();
        let url = data_url(&base, "ZH-MX7uHTRU8kaKFErhTy", "uber").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.ambitionbox.com/_next/data/ZH-MX7uHTRU8kaKFErhTy/overview/uber-overview.json"
        );
    }

    #[test]
    fn test_data_url_trailing_slash_base() {
        let base = canonicalize("http://127.0.0.1:8080/").unwrap();
        let url = data_url(&base, "v1", "tata-motors").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/_next/data/v1/overview/tata-motors-overview.json");
    }

    #[test]
    fn test_data_url_encodes_unsafe_slug() {
        let base = canonicalize("https://www.ambitionbox.com").unwrap();
        let url = data_url(&base, "v1", "what?#x").unwrap();
        assert_eq!(url.path(), "/_next/data/v1/overview/what%3F%23x-overview.json");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_overview_page_url() {
        let base = canonicalize("https://www.ambitionbox.com").unwrap();
        let url = overview_page_url(&base, "google").unwrap();
        assert_eq!(url.as_str(), "https://www.ambitionbox.com/overview/google-overview");
    }
}
