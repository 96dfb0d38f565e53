use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Represents a Jira project as returned by the project list endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraProject {
  pub id: String,
  pub key: String,
  pub name: String,
  /// Jira omits the flag for active projects
  #[serde(default)]
  pub archived: bool,
  pub project_type_key: Option<String>,
  pub simplified: Option<bool>,
  pub style: Option<String>,
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields.
///
/// Every field is optional because searches only return the fields that were
/// requested. Nested objects are kept as raw JSON so they can be passed
/// through unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraIssueFields {
  pub summary: Option<String>,
  /// A string in API v2, an Atlassian Document Format object in v3
  pub description: Option<Value>,
  pub status: Option<Value>,
  pub assignee: Option<Value>,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub duedate: Option<String>,
  pub priority: Option<Value>,
  pub attachment: Option<Vec<JiraAttachment>>,
}

/// Represents a file attached to an issue
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraAttachment {
  pub id: String,
  pub filename: Option<String>,
  pub created: Option<String>,
  pub size: Option<u64>,
  pub mime_type: Option<String>,
  pub content: Option<String>,
  pub thumbnail: Option<String>,
}

/// Request body for a JQL search
#[derive(Debug, Serialize)]
pub struct JiraSearchRequest {
  pub jql: String,
  pub fields: Vec<String>,
}

/// Response body of a JQL search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
  pub total: Option<u64>,
}

/// Represents a Jira transition
#[derive(Debug, Clone, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  /// The status the issue moves to when the transition is executed
  pub to: Option<JiraTransitionTarget>,
}

/// Target status of a transition
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraTransitionTarget {
  pub id: String,
  pub name: String,
  pub status_category: Option<Value>,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// Payload for the assignee endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRequest {
  pub account_id: String,
}
