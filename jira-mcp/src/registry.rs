//! Static table of the tools the server exposes.
//!
//! The table maps tool names to descriptions, operations and the parameter
//! struct whose derived JSON Schema is advertised by `tools/list`. The
//! dispatcher validates invocations against that same schema before calling
//! Jira.

use serde_json::{Map, Value};

use crate::params::{
  GetProjectsParams, GetTasksParams, TaskParams, UpdateTaskOwnerParams, UpdateTaskStatusParams, schema_for,
};

/// The operation a tool name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  GetProjects,
  GetTasks,
  GetTask,
  UpdateTaskStatus,
  UpdateTaskOwner,
  GetAvailableStatuses,
  GetTaskAttachments,
}

/// Declaration of one tool
#[derive(Debug, Clone, Copy)]
pub struct ToolDescriptor {
  pub name: &'static str,
  pub description: &'static str,
  pub operation: Operation,
  /// Input schema, derived from the tool's parameter struct
  pub schema: fn() -> Map<String, Value>,
}

static TOOLS: &[ToolDescriptor] = &[
  ToolDescriptor {
    name: "getProjects",
    description: "List Jira projects. Archived projects are left out unless `archived` is true.",
    operation: Operation::GetProjects,
    schema: schema_for::<GetProjectsParams>,
  },
  ToolDescriptor {
    name: "getTasks",
    description: "Search Jira issues with a JQL query.",
    operation: Operation::GetTasks,
    schema: schema_for::<GetTasksParams>,
  },
  ToolDescriptor {
    name: "getTask",
    description: "Get a single Jira issue by key or id.",
    operation: Operation::GetTask,
    schema: schema_for::<TaskParams>,
  },
  ToolDescriptor {
    name: "updateTaskStatus",
    description: "Move a Jira issue to another status using one of its available workflow transitions.",
    operation: Operation::UpdateTaskStatus,
    schema: schema_for::<UpdateTaskStatusParams>,
  },
  ToolDescriptor {
    name: "updateTaskOwner",
    description: "Assign a Jira issue to a user.",
    operation: Operation::UpdateTaskOwner,
    schema: schema_for::<UpdateTaskOwnerParams>,
  },
  ToolDescriptor {
    name: "getAvailableStatuses",
    description: "List the workflow transitions currently available for a Jira issue.",
    operation: Operation::GetAvailableStatuses,
    schema: schema_for::<TaskParams>,
  },
  ToolDescriptor {
    name: "getTaskAttachments",
    description: "List the files attached to a Jira issue.",
    operation: Operation::GetTaskAttachments,
    schema: schema_for::<TaskParams>,
  },
];

/// All tool descriptors, in listing order
pub fn tools() -> &'static [ToolDescriptor] {
  TOOLS
}

/// Find the descriptor for a tool name
pub fn lookup(name: &str) -> Option<&'static ToolDescriptor> {
  TOOLS.iter().find(|tool| tool.name == name)
}

impl ToolDescriptor {
  /// The JSON Schema object advertised for this tool
  pub fn input_schema(&self) -> Map<String, Value> {
    (self.schema)()
  }

  /// Names listed as required by the schema that are absent or `null` in `arguments`
  pub fn missing_required(&self, arguments: &Map<String, Value>) -> Vec<String> {
    let schema = self.input_schema();
    let Some(required) = schema.get("required").and_then(Value::as_array) else {
      return Vec::new();
    };

    required
      .iter()
      .filter_map(Value::as_str)
      .filter(|name| arguments.get(*name).is_none_or(Value::is_null))
      .map(ToString::to_string)
      .collect()
  }
}
