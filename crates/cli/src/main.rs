//! ambitscope command line entry point.
//!
//! Prints a company profile as Markdown, or as JSON with `--json`. Logs go
//! to stderr; set `RUST_LOG=info` to follow the pipeline.

use ambitscope_client::{CompanyProfile, ProfileContext};
use ambitscope_core::AppConfig;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const EMPTY_NAME_MESSAGE: &str = "Please enter a company name to search.";
const NOT_FOUND_MESSAGE: &str = "Company not found or data unavailable.";

#[derive(Parser, Debug)]
#[command(name = "ambitscope", version, about = "Company profiles from AmbitionBox")]
struct Cli {
    #[arg(help = "Company name, e.g. \"Tata Motors\"")]
    company_name: Option<String>,
    #[arg(long, help = "Derive the slug from the name instead of searching for it")]
    exact: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let Some(company_name) = cli.company_name.as_deref().map(str::trim).filter(|name| !name.is_empty()) else {
        println!("{EMPTY_NAME_MESSAGE}");
        return Ok(());
    };

    let config = AppConfig::load()?;
    let ctx = ProfileContext::bootstrap(&config).await?;
    let profile = ctx.lookup(company_name, cli.exact).await?;

    println!("{}", render(profile.as_ref(), cli.json)?);

    Ok(())
}

fn render(profile: Option<&CompanyProfile>, json: bool) -> Result<String> {
    Ok(match (profile, json) {
        (Some(profile), true) => serde_json::to_string_pretty(profile)?,
        (Some(profile), false) => profile.sections.to_markdown(),
        (None, true) => serde_json::json!({ "found": false, "message": NOT_FOUND_MESSAGE }).to_string(),
        (None, false) => NOT_FOUND_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambitscope_client::Slug;
    use ambitscope_core::DisplaySections;

    fn profile() -> CompanyProfile {
        CompanyProfile { slug: Slug::derive("Acme"), fetched_at: chrono::Utc::now(), sections: DisplaySections::empty() }
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["ambitscope", "Tata Motors", "--exact", "--json"]).unwrap();
        assert_eq!(cli.company_name.as_deref(), Some("Tata Motors"));
        assert!(cli.exact);
        assert!(cli.json);

        let cli = Cli::try_parse_from(["ambitscope"]).unwrap();
        assert!(cli.company_name.is_none());
        assert!(!cli.exact);
    }

    #[test]
    fn test_render_not_found() {
        assert_eq!(render(None, false).unwrap(), NOT_FOUND_MESSAGE);

        let json: serde_json::Value = serde_json::from_str(&render(None, true).unwrap()).unwrap();
        assert_eq!(json["found"], false);
    }

    #[test]
    fn test_render_profile() {
        let profile = profile();
        assert!(render(Some(&profile), false).unwrap().starts_with("# Company Overview: N/A"));

        let json: serde_json::Value = serde_json::from_str(&render(Some(&profile), true).unwrap()).unwrap();
        assert_eq!(json["slug"], "acme");
        assert_eq!(json["sections"]["overview"]["status"], "unavailable");
    }
}
