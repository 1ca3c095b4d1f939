//! ambitscope-mcp server entry point.
//!
//! Loads configuration, discovers the site's data version and boots the MCP
//! server on stdio transport. Logging goes to stderr to avoid interfering
//! with the JSON-RPC protocol on stdout.

use ambitscope_client::ProfileContext;
use ambitscope_core::AppConfig;
use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let ctx = ProfileContext::bootstrap(&config).await?;

    tracing::info!(version = %ctx.version(), "Starting ambitscope server on stdio transport");

    let handler = handler::AmbitscopeServer::new(ctx);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
