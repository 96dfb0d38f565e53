//! Parameter structs for the Jira tools.
//!
//! These types are both the deserialization target for tool arguments and the
//! source of the JSON Schema advertised by `tools/list`.

use schemars::generate::SchemaSettings;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields fetched by `getTasks` when the caller does not pass `fields`
pub const DEFAULT_TASK_FIELDS: &[&str] = &["summary", "description", "status", "assignee", "created", "updated", "duedate"];

fn default_task_fields() -> Vec<String> {
  DEFAULT_TASK_FIELDS.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProjectsParams {
  /// Include archived projects.
  #[serde(default)]
  pub archived: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetTasksParams {
  /// JQL query, e.g. "project = PROJ AND status = 'In Progress'".
  pub jql: String,
  /// Issue fields to fetch from Jira.
  #[serde(default = "default_task_fields")]
  pub fields: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskParams {
  /// Issue key or id, e.g. "PROJ-123".
  pub task_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusParams {
  /// Issue key or id, e.g. "PROJ-123".
  pub task_id: String,
  /// Id of the target status, as listed by getAvailableStatuses under `to.id`.
  pub status_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskOwnerParams {
  /// Issue key or id, e.g. "PROJ-123".
  pub task_id: String,
  /// Atlassian account id of the new assignee.
  pub account_id: String,
}

/// Generate the input schema object for a parameter struct
pub fn schema_for<T: JsonSchema>() -> Map<String, Value> {
  let generator = SchemaSettings::draft07()
    .with(|settings| settings.inline_subschemas = true)
    .into_generator();
  match serde_json::to_value(generator.into_root_schema_for::<T>()) {
    Ok(Value::Object(mut schema)) => {
      schema.remove("$schema");
      schema
    }
    _ => Map::new(),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_default_task_fields() {
    let params: GetTasksParams = serde_json::from_value(json!({"jql": "project = TEST"})).unwrap();

    assert_eq!(
      params.fields,
      vec!["summary", "description", "status", "assignee", "created", "updated", "duedate"]
    );
  }

  #[test]
  fn test_schema_uses_wire_names_and_docs() {
    let schema = schema_for::<UpdateTaskStatusParams>();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"], json!(["taskId", "statusId"]));
    assert_eq!(schema["properties"]["taskId"]["type"], "string");
    assert_eq!(
      schema["properties"]["taskId"]["description"],
      "Issue key or id, e.g. \"PROJ-123\"."
    );
  }

  #[test]
  fn test_schema_carries_defaults() {
    let projects = schema_for::<GetProjectsParams>();
    assert_eq!(projects["properties"]["archived"]["type"], "boolean");
    assert_eq!(projects["properties"]["archived"]["default"], false);

    let tasks = schema_for::<GetTasksParams>();
    assert_eq!(tasks["required"], json!(["jql"]));
    assert_eq!(tasks["properties"]["fields"]["items"]["type"], "string");
    assert_eq!(
      tasks["properties"]["fields"]["default"],
      json!(["summary", "description", "status", "assignee", "created", "updated", "duedate"])
    );
  }
}
