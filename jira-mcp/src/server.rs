//! MCP server wiring.
//!
//! Tool listing and invocation are handled by hand rather than through the
//! rmcp tool router: unknown tool names must come back as an error result, not
//! as a protocol error.

use std::sync::Arc;

use jira_client::JiraClient;
use rmcp::model::{
  CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult, PaginatedRequestParam,
  ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use crate::dispatch::Dispatcher;
use crate::registry;

#[derive(Clone)]
pub struct JiraMcpServer {
  dispatcher: Arc<Dispatcher>,
}

impl JiraMcpServer {
  pub fn new(client: JiraClient) -> Self {
    Self {
      dispatcher: Arc::new(Dispatcher::new(Arc::new(client))),
    }
  }

  /// Tool metadata advertised by `tools/list`
  pub fn tools(&self) -> Vec<Tool> {
    registry::tools()
      .iter()
      .map(|tool| Tool::new(tool.name, tool.description, Arc::new(tool.input_schema())))
      .collect()
  }

  /// Execute a tool call; failures are reported inside the result
  pub async fn handle_call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
    self.dispatcher.call(name, arguments).await.into_call_tool_result()
  }
}

impl ServerHandler for JiraMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      protocol_version: ProtocolVersion::V_2024_11_05,
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      server_info: Implementation {
        name: "jira-mcp".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        title: None,
        icons: None,
        website_url: None,
      },
      instructions: Some(
        "Jira MCP server. List projects, search and read issues, move issues through their workflow \
         and change assignees. Use getAvailableStatuses to find the status ids accepted by updateTaskStatus."
          .into(),
      ),
    }
  }

  async fn list_tools(
    &self,
    _request: Option<PaginatedRequestParam>,
    _context: RequestContext<RoleServer>,
  ) -> Result<ListToolsResult, McpError> {
    Ok(ListToolsResult::with_all_items(self.tools()))
  }

  async fn call_tool(
    &self,
    request: CallToolRequestParam,
    _context: RequestContext<RoleServer>,
  ) -> Result<CallToolResult, McpError> {
    Ok(self.handle_call(&request.name, request.arguments).await)
  }
}
