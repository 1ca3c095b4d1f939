//! Name in, display sections out.
//!
//! A `ProfileContext` is built once per process: it owns the HTTP session,
//! the build token discovered at bootstrap and the resolver with its search
//! collaborator. Each lookup then runs resolve, fetch and normalize in
//! sequence.

use ambitscope_core::{AppConfig, DisplaySections, Error};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use crate::company::fetch_company;
use crate::extract::normalize;
use crate::fetch::{SessionConfig, SiteSession};
use crate::resolve::{Resolver, Slug};
use crate::search::{KeywordSearch, NoSearch, SearchClient, SearchConfig};
use crate::version::{VersionToken, discover_version};

/// A normalized company profile.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub slug: Slug,
    pub fetched_at: DateTime<Utc>,
    pub sections: DisplaySections,
}

/// Process-wide state shared by every lookup.
pub struct ProfileContext {
    session: SiteSession,
    version: VersionToken,
    resolver: Resolver,
}

impl ProfileContext {
    /// Build the session, choose a search collaborator and discover the
    /// data endpoint version.
    ///
    /// # Errors
    ///
    /// `Error::VersionDiscoveryFailed` when the build token cannot be read;
    /// the context is unusable without it.
    pub async fn bootstrap(config: &AppConfig) -> Result<Self, Error> {
        let session = SiteSession::new(&SessionConfig::from(config))?;

        let search: Box<dyn KeywordSearch> = match SearchConfig::from_app_config(config).and_then(SearchClient::new) {
            Ok(client) => Box::new(client),
            Err(e) => {
                tracing::warn!(reason = %e, "keyword search disabled, fuzzy lookups use the exact slug");
                Box::new(NoSearch)
            }
        };

        let version = discover_version(&session, &config.reference_slug).await?;
        let resolver = Resolver::new(search, config.site_domain.clone());

        Ok(Self::from_parts(session, version, resolver))
    }

    /// Assemble a context from already-built parts.
    pub fn from_parts(session: SiteSession, version: VersionToken, resolver: Resolver) -> Self {
        Self { session, version, resolver }
    }

    pub fn version(&self) -> &VersionToken {
        &self.version
    }

    /// Look up `company_name` and normalize whatever the site returns.
    ///
    /// Returns `Ok(None)` when the company is not found or its data is
    /// unavailable; there is no partial profile.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` for a blank name, `Error::InvalidUrl` when the
    /// data endpoint URL cannot be built.
    pub async fn lookup(&self, company_name: &str, exact_match: bool) -> Result<Option<CompanyProfile>, Error> {
        let company_name = company_name.trim();
        if company_name.is_empty() {
            return Err(Error::InvalidInput("company name cannot be empty".into()));
        }

        let start = Instant::now();
        let slug = self.resolver.resolve(company_name, exact_match).await;

        let Some(record) = fetch_company(&self.session, &slug, &self.version).await?.found() else {
            return Ok(None);
        };

        let sections = normalize(&record);
        tracing::info!(
            %slug,
            available = sections.available_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "company profile ready"
        );

        Ok(Some(CompanyProfile { slug, fetched_at: Utc::now(), sections }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambitscope_core::Section;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BUILD_ID: &str = "test-build-7";

    const REFERENCE_PAGE: &str = r#"<html><body><div id="__next"></div><script id="__NEXT_DATA__" type="application/json">{"buildId":"test-build-7","page":"/overview/[company]"}</script></body></html>"#;

    const GOOGLE_DOCUMENT: &str =
        r#"{"pageProps":{"companyMetaInformation":{"companyName":"Google LLC","foundedYear":1998}}}"#;

    /// Serve fixed bodies by path on a loopback port; unknown paths get 404.
    async fn serve(routes: Vec<(String, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else { return };
                let routes = routes.clone();

                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&request);
                    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = match routes.iter().find(|(route, _)| *route == path) {
                        Some((_, body)) => ("200 OK", *body),
                        None => ("404 Not Found", "not found"),
                    };

                    let response = format!(
                        "HTTP/1.1 {status}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{addr}")
    }

    fn config(base_url: String) -> AppConfig {
        AppConfig { site_base_url: base_url, ..Default::default() }
    }

    fn data_path(slug: &str) -> String {
        format!("/_next/data/{BUILD_ID}/overview/{slug}-overview.json")
    }

    #[tokio::test]
    async fn test_exact_lookup_found() {
        let base = serve(vec![
            ("/overview/google-overview".to_string(), REFERENCE_PAGE),
            (data_path("google"), GOOGLE_DOCUMENT),
        ])
        .await;

        let ctx = ProfileContext::bootstrap(&config(base)).await.unwrap();
        assert_eq!(ctx.version().as_str(), BUILD_ID);

        let profile = ctx.lookup("Google", true).await.unwrap().unwrap();
        assert_eq!(profile.slug.as_str(), "google");
        assert_eq!(profile.sections.header(), "Company Overview: Google LLC");
        let Section::Available(overview) = &profile.sections.overview else { panic!("overview missing") };
        assert_eq!(overview.founded_year, "1998");
        assert!(!profile.sections.reviews.is_available());
    }

    #[tokio::test]
    async fn test_exact_lookup_not_found() {
        let base = serve(vec![("/overview/google-overview".to_string(), REFERENCE_PAGE)]).await;

        let ctx = ProfileContext::bootstrap(&config(base)).await.unwrap();
        let profile = ctx.lookup("NoSuchCompany123", true).await.unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn test_fuzzy_without_credentials_uses_exact_slug() {
        let base = serve(vec![
            ("/overview/google-overview".to_string(), REFERENCE_PAGE),
            (data_path("tata-motors"), r#"{"pageProps":{"companyMetaInformation":{"companyName":"Tata Motors"}}}"#),
        ])
        .await;

        let ctx = ProfileContext::bootstrap(&config(base)).await.unwrap();
        let profile = ctx.lookup("  Tata Motors ", false).await.unwrap().unwrap();
        assert_eq!(profile.slug.as_str(), "tata-motors");
    }

    #[tokio::test]
    async fn test_malformed_document_is_not_found() {
        let base = serve(vec![
            ("/overview/google-overview".to_string(), REFERENCE_PAGE),
            (data_path("acme"), "<html>blocked</html>"),
        ])
        .await;

        let ctx = ProfileContext::bootstrap(&config(base)).await.unwrap();
        assert!(ctx.lookup("acme", true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let base = serve(vec![("/overview/google-overview".to_string(), REFERENCE_PAGE)]).await;

        let ctx = ProfileContext::bootstrap(&config(base)).await.unwrap();
        assert!(matches!(ctx.lookup("   ", true).await, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_fails_without_reference_page() {
        let base = serve(Vec::new()).await;

        let result = ProfileContext::bootstrap(&config(base)).await;
        assert!(matches!(result, Err(Error::VersionDiscoveryFailed(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_fails_without_build_id() {
        let base = serve(vec![("/overview/google-overview".to_string(), "<html><body>maintenance</body></html>")]).await;

        let result = ProfileContext::bootstrap(&config(base)).await;
        assert!(matches!(result, Err(Error::VersionDiscoveryFailed(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_found() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let session = SiteSession::new(&SessionConfig::from(&config(format!("http://{addr}")))).unwrap();
        let resolver = Resolver::new(Box::new(NoSearch), "ambitionbox.com");
        let ctx = ProfileContext::from_parts(session, VersionToken::new(BUILD_ID), resolver);

        assert!(ctx.lookup("Google", true).await.unwrap().is_none());
    }
}
