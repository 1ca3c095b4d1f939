//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::company_profile::{CompanyProfileParams, company_profile_impl};

use ambitscope_client::ProfileContext;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use std::sync::Arc;

/// The main MCP server handler for ambitscope.
#[derive(Clone)]
pub struct AmbitscopeServer {
    tool_router: ToolRouter<Self>,
    ctx: Arc<ProfileContext>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl AmbitscopeServer {
    /// Create a new server handler around a bootstrapped context.
    pub fn new(ctx: ProfileContext) -> Self {
        Self { tool_router: Self::tool_router(), ctx: Arc::new(ctx) }
    }

    /// Look up a company profile on AmbitionBox.
    ///
    /// Resolves the name to a site slug (via keyword search unless exact_match
    /// is set), fetches the overview document and normalizes every section.
    #[tool(
        description = "Look up a company on AmbitionBox. Returns the profile as Markdown plus structured sections (overview, ratings, interviews, jobs, salaries, benefits, reviews, ...)."
    )]
    async fn company_profile(&self, params: Parameters<CompanyProfileParams>) -> Result<CallToolResult, McpError> {
        company_profile_impl(&self.ctx, params.0).await
    }
}

impl ServerHandler for AmbitscopeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "ambitscope".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(format!("Company profiles from AmbitionBox (data version {}).", self.ctx.version())),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
