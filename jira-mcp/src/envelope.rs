//! The result envelope every tool call produces.
//!
//! Wire shape: `{"content": [{"type": "text", "text": ...}], "isError": true}`
//! where `isError` is only present on failures. Successful payloads are
//! pretty-printed JSON with two-space indentation.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// A single text block of the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub text: String,
}

impl TextContent {
  fn new(text: String) -> Self {
    Self { kind: "text", text }
  }
}

/// Result of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEnvelope {
  pub content: Vec<TextContent>,
  #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
  pub is_error: Option<bool>,
}

impl ToolEnvelope {
  /// Successful result carrying `payload` as pretty JSON
  pub fn json<T: Serialize>(payload: &T) -> Self {
    match serde_json::to_string_pretty(payload) {
      Ok(text) => Self {
        content: vec![TextContent::new(text)],
        is_error: None,
      },
      Err(e) => Self::error(format!("Failed to serialize tool result: {e}")),
    }
  }

  /// Failed result carrying a human-readable message
  pub fn error(message: impl Into<String>) -> Self {
    Self {
      content: vec![TextContent::new(message.into())],
      is_error: Some(true),
    }
  }

  pub fn is_error(&self) -> bool {
    self.is_error.unwrap_or(false)
  }

  /// Text of the first content block
  pub fn text(&self) -> &str {
    self.content.first().map_or("", |content| content.text.as_str())
  }

  /// Convert into the rmcp result type, preserving the absent error flag
  pub fn into_call_tool_result(self) -> CallToolResult {
    let content = self.content.into_iter().map(|c| Content::text(c.text)).collect();
    let mut result = CallToolResult::success(content);
    result.is_error = self.is_error;
    result
  }
}
