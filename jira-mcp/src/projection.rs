//! Fixed-shape views of Jira entities returned by the tools.
//!
//! A projection copies what Jira sent and nothing else. Fields Jira did not
//! return (or returned as `null`) are left out of the serialized output rather
//! than filled with placeholders.

use jira_client::{JiraAttachment, JiraIssue, JiraProject, JiraTransition, JiraTransitionTarget};
use serde::Serialize;
use serde_json::Value;

/// Issue view used by `getTask` and `getTasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueProjection {
  pub id: String,
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duedate: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<Value>,
}

impl From<JiraIssue> for IssueProjection {
  fn from(issue: JiraIssue) -> Self {
    let fields = issue.fields;
    Self {
      id: issue.id,
      key: issue.key,
      summary: fields.summary,
      description: fields.description,
      status: fields.status,
      assignee: fields.assignee,
      created: fields.created,
      updated: fields.updated,
      duedate: fields.duedate,
      priority: fields.priority,
    }
  }
}

/// Project view used by `getProjects`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProjection {
  pub id: String,
  pub key: String,
  pub name: String,
  pub archived: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub simplified: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
}

impl From<JiraProject> for ProjectProjection {
  fn from(project: JiraProject) -> Self {
    Self {
      id: project.id,
      key: project.key,
      name: project.name,
      archived: project.archived,
      project_type_key: project.project_type_key,
      simplified: project.simplified,
      style: project.style,
    }
  }
}

/// Transition view used by `getAvailableStatuses`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionProjection {
  pub id: String,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub to: Option<TransitionTargetProjection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionTargetProjection {
  pub id: String,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status_category: Option<Value>,
}

impl From<JiraTransition> for TransitionProjection {
  fn from(transition: JiraTransition) -> Self {
    Self {
      id: transition.id,
      name: transition.name,
      to: transition.to.map(Into::into),
    }
  }
}

impl From<JiraTransitionTarget> for TransitionTargetProjection {
  fn from(target: JiraTransitionTarget) -> Self {
    Self {
      id: target.id,
      name: target.name,
      status_category: target.status_category,
    }
  }
}

/// Attachment view used by `getTaskAttachments`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentProjection {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub filename: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mime_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub thumbnail: Option<String>,
}

impl From<JiraAttachment> for AttachmentProjection {
  fn from(attachment: JiraAttachment) -> Self {
    Self {
      id: attachment.id,
      filename: attachment.filename,
      created: attachment.created,
      size: attachment.size,
      mime_type: attachment.mime_type,
      content: attachment.content,
      thumbnail: attachment.thumbnail,
    }
  }
}

/// Project the attachments of an issue; no attachment list means none
pub fn project_attachments(issue: JiraIssue) -> Vec<AttachmentProjection> {
  issue
    .fields
    .attachment
    .unwrap_or_default()
    .into_iter()
    .map(Into::into)
    .collect()
}

/// Confirmation returned by `updateTaskStatus`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueStatusSummary {
  pub id: String,
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<Value>,
}

impl From<JiraIssue> for IssueStatusSummary {
  fn from(issue: JiraIssue) -> Self {
    Self {
      id: issue.id,
      key: issue.key,
      status: issue.fields.status,
    }
  }
}

/// Confirmation returned by `updateTaskOwner`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueAssigneeSummary {
  pub id: String,
  pub key: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<Value>,
}

impl From<JiraIssue> for IssueAssigneeSummary {
  fn from(issue: JiraIssue) -> Self {
    Self {
      id: issue.id,
      key: issue.key,
      assignee: issue.fields.assignee,
    }
  }
}
