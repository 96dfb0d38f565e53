//! Errors a tool invocation can end with.
//!
//! None of these escape the dispatcher; each is rendered into an error
//! envelope using its `Display` text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
  #[error("Unknown tool: {0}")]
  UnknownTool(String),

  #[error("Missing required argument(s) for {tool}: {}", .names.join(", "))]
  MissingArguments { tool: &'static str, names: Vec<String> },

  #[error("Invalid arguments for {tool}: {source}")]
  InvalidArguments {
    tool: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("No transition available to move {task_id} to status {status_id}")]
  NoMatchingTransition { task_id: String, status_id: String },

  /// The mutation went through but reading the issue back failed
  #[error("{action} was applied to {task_id}, but re-fetching the issue failed: {source:#}")]
  ConfirmationFailed {
    task_id: String,
    action: &'static str,
    #[source]
    source: anyhow::Error,
  },

  #[error("{0:#}")]
  Upstream(#[from] anyhow::Error),
}
