//! Company document fetch from the versioned data endpoint.

use ambitscope_core::{CompanyRecord, Error};
use reqwest::StatusCode;
use std::fmt;

use crate::fetch::{SiteSession, data_url};
use crate::resolve::Slug;
use crate::version::VersionToken;

/// Outcome of a company lookup.
#[derive(Debug)]
pub enum Lookup {
    Found(Box<CompanyRecord>),
    NotFound(NotFoundReason),
}

impl Lookup {
    pub fn found(self) -> Option<CompanyRecord> {
        match self {
            Lookup::Found(record) => Some(*record),
            Lookup::NotFound(_) => None,
        }
    }
}

/// Why a lookup came back empty. Kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The endpoint answered with a non-200 status.
    Status(u16),
    /// The body was not JSON or had no `pageProps` object.
    Malformed(String),
    /// The request never produced a response.
    Transport(String),
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::Status(status) => write!(f, "status {status}"),
            NotFoundReason::Malformed(reason) => write!(f, "malformed body: {reason}"),
            NotFoundReason::Transport(reason) => write!(f, "transport: {reason}"),
        }
    }
}

/// Turn a data endpoint response into a lookup outcome.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Lookup {
    if status != StatusCode::OK {
        return Lookup::NotFound(NotFoundReason::Status(status.as_u16()));
    }

    let document: serde_json::Value = match serde_json::from_slice(body) {
        Ok(document) => document,
        Err(e) => return Lookup::NotFound(NotFoundReason::Malformed(e.to_string())),
    };

    let Some(page_props) = document.get("pageProps") else {
        return Lookup::NotFound(NotFoundReason::Malformed("no pageProps".into()));
    };

    match CompanyRecord::from_page_props(page_props) {
        Some(record) => Lookup::Found(Box::new(record)),
        None => Lookup::NotFound(NotFoundReason::Malformed("pageProps is not an object".into())),
    }
}

/// Fetch the overview document for `slug`.
///
/// # Errors
///
/// Only when the endpoint URL cannot be built. Every response problem and
/// transport failure is a `Lookup::NotFound`.
pub async fn fetch_company(session: &SiteSession, slug: &Slug, version: &VersionToken) -> Result<Lookup, Error> {
    let url = data_url(session.base_url(), version.as_str(), slug.as_str())
        .map_err(|e| Error::InvalidUrl(e.to_string()))?;

    tracing::debug!(%url, "fetching company document");

    let lookup = match session.get(&url).await {
        Ok(response) => interpret_response(response.status, &response.bytes),
        Err(e) => Lookup::NotFound(NotFoundReason::Transport(e.to_string())),
    };

    match &lookup {
        Lookup::Found(record) => {
            tracing::info!(%slug, sections = ?record.present_sections(), "company document fetched")
        }
        Lookup::NotFound(reason) => tracing::warn!(%slug, %reason, "company not found"),
    }

    Ok(lookup)
}
