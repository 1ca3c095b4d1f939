//! company_profile tool implementation.
//!
//! Resolves a company name, fetches its overview document and returns the
//! normalized sections as Markdown plus structured JSON.

use ambitscope_client::{CompanyProfile, ProfileContext};
use ambitscope_core::DisplaySections;
use rmcp::{ErrorData as McpError, model::*};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown when the company cannot be found or its data is unavailable.
pub const NOT_FOUND_MESSAGE: &str = "Company not found or data unavailable.";

/// Input parameters for company_profile tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyProfileParams {
    /// Company name as a person would type it, e.g. "Tata Motors".
    pub company_name: String,

    /// Derive the slug directly from the name instead of searching for it.
    #[serde(default)]
    pub exact_match: bool,
}

/// Output structure for company_profile tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyProfileOutput {
    /// Whether a company document was found.
    pub found: bool,
    /// Site slug the name resolved to (only when found).
    pub slug: Option<String>,
    /// ISO8601 timestamp of when the document was fetched.
    pub fetched_at: Option<String>,
    /// Rendered profile, or the not-found message.
    pub markdown: String,
    /// Normalized sections (only when found).
    pub sections: Option<DisplaySections>,
}

impl From<Option<CompanyProfile>> for CompanyProfileOutput {
    fn from(profile: Option<CompanyProfile>) -> Self {
        match profile {
            Some(profile) => Self {
                found: true,
                slug: Some(profile.slug.to_string()),
                fetched_at: Some(profile.fetched_at.to_rfc3339()),
                markdown: profile.sections.to_markdown(),
                sections: Some(profile.sections),
            },
            None => {
                Self { found: false, slug: None, fetched_at: None, markdown: NOT_FOUND_MESSAGE.into(), sections: None }
            }
        }
    }
}

/// Implementation of the company_profile tool.
pub async fn company_profile_impl(
    ctx: &ProfileContext, params: CompanyProfileParams,
) -> Result<CallToolResult, McpError> {
    let profile = ctx.lookup(&params.company_name, params.exact_match).await?;
    let output = CompanyProfileOutput::from(profile);

    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&output).unwrap_or_default(),
    )]))
}
