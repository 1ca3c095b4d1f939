//! Company name to site slug resolution.
//!
//! Exact mode is a pure string transform. Fuzzy mode asks a keyword search
//! collaborator for the top page on the site and reads the slug out of its
//! URL. Resolution itself never fails: every fuzzy miss degrades to the
//! exact slug.
//!
//! The URL reading is a heuristic. It relies on the site naming pages
//! `<slug>-<section>` (e.g. `/reviews/infosys-reviews`); a change in the
//! site's URL scheme silently turns every fuzzy lookup into an exact one.

use serde::Serialize;
use std::fmt;

use crate::search::{KeywordSearch, SearchError, SearchRequest};

/// Page-name suffixes the site appends to a slug, tried in this order.
pub const SECTION_SUFFIXES: [&str; 8] = [
    "-overview",
    "-reviews",
    "-salaries",
    "-interview-questions",
    "-jobs-cmp",
    "-benefits",
    "-photos",
    "-discussions",
];

/// URL-safe company identifier on the review site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Lowercase `company_name` and replace every space with a hyphen.
    pub fn derive(company_name: &str) -> Self {
        Slug(company_name.to_lowercase().replace(' ', "-"))
    }

    /// Read a slug out of a site link such as
    /// `https://www.ambitionbox.com/reviews/tcs-reviews`.
    ///
    /// Segments are percent-decoded first, so the slug holds the site's
    /// identifier as-is and is encoded once when a request URL is built.
    /// The first segment containing a known suffix wins; the suffix is
    /// removed from it and the rest is the slug.
    pub fn from_link(link: &str) -> Option<Self> {
        let url = url::Url::parse(link).ok()?;

        url.path_segments()?.find_map(|segment| {
            let segment = urlencoding::decode(segment).ok()?;
            let suffix = SECTION_SUFFIXES.iter().find(|suffix| segment.contains(**suffix))?;
            let slug = segment.replace(*suffix, "");
            (!slug.is_empty()).then_some(Slug(slug))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves free-text company names to slugs.
pub struct Resolver {
    search: Box<dyn KeywordSearch>,
    site_domain: String,
}

impl Resolver {
    pub fn new(search: Box<dyn KeywordSearch>, site_domain: impl Into<String>) -> Self {
        Self { search, site_domain: site_domain.into() }
    }

    /// Best-guess slug for `company_name`. Never fails.
    pub async fn resolve(&self, company_name: &str, exact_match: bool) -> Slug {
        if exact_match {
            let slug = Slug::derive(company_name);
            tracing::info!(%slug, "resolved exact slug");
            return slug;
        }

        match self.lookup(company_name).await {
            Ok(slug) => {
                tracing::info!(%slug, "resolved slug via search");
                slug
            }
            Err(reason) => {
                let slug = Slug::derive(company_name);
                tracing::warn!(%slug, %reason, "fuzzy resolution degraded to exact slug");
                slug
            }
        }
    }

    async fn lookup(&self, company_name: &str) -> Result<Slug, Degraded> {
        let query = SearchRequest::site_query(&self.site_domain, company_name);
        let link = self.search.first_link(&query).await.map_err(Degraded::Search)?.ok_or(Degraded::NoResults)?;

        Slug::from_link(&link).ok_or(Degraded::NoSlugInLink(link))
    }
}

/// Why a fuzzy lookup fell back to the exact slug.
#[derive(Debug, thiserror::Error)]
enum Degraded {
    #[error("search failed: {0}")]
    Search(SearchError),

    #[error("search returned no results")]
    NoResults,

    #[error("no known section suffix in {0}")]
    NoSlugInLink(String),
}
