//! Executes tool invocations against Jira.
//!
//! A call is resolved through the registry, validated against the declared
//! parameters, routed to a typed handler and finally rendered into a
//! [`ToolEnvelope`]. Handler failures never propagate past [`Dispatcher::call`].

use std::sync::Arc;

use jira_client::JiraClient;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::envelope::ToolEnvelope;
use crate::error::ToolError;
use crate::params::{GetProjectsParams, GetTasksParams, TaskParams, UpdateTaskOwnerParams, UpdateTaskStatusParams};
use crate::projection::{
  AttachmentProjection, IssueAssigneeSummary, IssueProjection, IssueStatusSummary, ProjectProjection,
  TransitionProjection, project_attachments,
};
use crate::registry::{self, Operation, ToolDescriptor};

/// Routes tool calls to the Jira client
pub struct Dispatcher {
  client: Arc<JiraClient>,
}

impl Dispatcher {
  pub fn new(client: Arc<JiraClient>) -> Self {
    Self { client }
  }

  /// Run one tool invocation and render the outcome.
  ///
  /// Every failure, including an unknown tool name, comes back as an error
  /// envelope.
  pub async fn call(&self, name: &str, arguments: Option<Map<String, Value>>) -> ToolEnvelope {
    debug!(tool = name, "Dispatching tool call");
    match self.execute(name, arguments.unwrap_or_default()).await {
      Ok(envelope) => envelope,
      Err(e) => {
        warn!(tool = name, error = %e, "Tool call failed");
        ToolEnvelope::error(e.to_string())
      }
    }
  }

  async fn execute(&self, name: &str, mut arguments: Map<String, Value>) -> Result<ToolEnvelope, ToolError> {
    let tool = registry::lookup(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    // An explicit null means "not provided", so optional params take their defaults.
    arguments.retain(|_, value| !value.is_null());

    let missing = tool.missing_required(&arguments);
    if !missing.is_empty() {
      return Err(ToolError::MissingArguments {
        tool: tool.name,
        names: missing,
      });
    }

    match tool.operation {
      Operation::GetProjects => Ok(ToolEnvelope::json(&self.get_projects(parse(tool, arguments)?).await?)),
      Operation::GetTasks => Ok(ToolEnvelope::json(&self.get_tasks(parse(tool, arguments)?).await?)),
      Operation::GetTask => Ok(ToolEnvelope::json(&self.get_task(parse(tool, arguments)?).await?)),
      Operation::UpdateTaskStatus => Ok(ToolEnvelope::json(
        &self.update_task_status(parse(tool, arguments)?).await?,
      )),
      Operation::UpdateTaskOwner => Ok(ToolEnvelope::json(
        &self.update_task_owner(parse(tool, arguments)?).await?,
      )),
      Operation::GetAvailableStatuses => Ok(ToolEnvelope::json(
        &self.get_available_statuses(parse(tool, arguments)?).await?,
      )),
      Operation::GetTaskAttachments => Ok(ToolEnvelope::json(
        &self.get_task_attachments(parse(tool, arguments)?).await?,
      )),
    }
  }

  pub async fn get_projects(&self, params: GetProjectsParams) -> Result<Vec<ProjectProjection>, ToolError> {
    let projects = self.client.get_projects().await?;
    Ok(
      projects
        .into_iter()
        .filter(|project| params.archived || !project.archived)
        .map(Into::into)
        .collect(),
    )
  }

  /// `fields` only limits what Jira returns; the projection shape is fixed.
  pub async fn get_tasks(&self, params: GetTasksParams) -> Result<Vec<IssueProjection>, ToolError> {
    let issues = self.client.search_issues(&params.jql, &params.fields).await?;
    Ok(issues.into_iter().map(Into::into).collect())
  }

  pub async fn get_task(&self, params: TaskParams) -> Result<IssueProjection, ToolError> {
    Ok(self.client.get_issue(&params.task_id).await?.into())
  }

  /// Find the transition leading to `status_id`, run it and read the issue back.
  pub async fn update_task_status(&self, params: UpdateTaskStatusParams) -> Result<IssueStatusSummary, ToolError> {
    let transitions = self.client.get_transitions(&params.task_id).await?;
    let transition = transitions
      .iter()
      .find(|transition| transition.to.as_ref().is_some_and(|to| to.id == params.status_id))
      .ok_or_else(|| ToolError::NoMatchingTransition {
        task_id: params.task_id.clone(),
        status_id: params.status_id.clone(),
      })?;

    self.client.transition_issue(&params.task_id, &transition.id).await?;
    info!(task = %params.task_id, transition = %transition.id, status = %params.status_id, "Transitioned issue");

    let issue = self
      .client
      .get_issue(&params.task_id)
      .await
      .map_err(|source| ToolError::ConfirmationFailed {
        task_id: params.task_id.clone(),
        action: "Status transition",
        source,
      })?;
    Ok(issue.into())
  }

  pub async fn update_task_owner(&self, params: UpdateTaskOwnerParams) -> Result<IssueAssigneeSummary, ToolError> {
    self.client.assign_issue(&params.task_id, &params.account_id).await?;
    info!(task = %params.task_id, account = %params.account_id, "Assigned issue");

    let issue = self
      .client
      .get_issue(&params.task_id)
      .await
      .map_err(|source| ToolError::ConfirmationFailed {
        task_id: params.task_id.clone(),
        action: "Assignee change",
        source,
      })?;
    Ok(issue.into())
  }

  pub async fn get_available_statuses(&self, params: TaskParams) -> Result<Vec<TransitionProjection>, ToolError> {
    let transitions = self.client.get_transitions(&params.task_id).await?;
    Ok(transitions.into_iter().map(Into::into).collect())
  }

  pub async fn get_task_attachments(&self, params: TaskParams) -> Result<Vec<AttachmentProjection>, ToolError> {
    let issue = self.client.get_issue(&params.task_id).await?;
    Ok(project_attachments(issue))
  }
}

/// Deserialize the argument map into a handler's parameter struct
fn parse<T: DeserializeOwned>(tool: &ToolDescriptor, arguments: Map<String, Value>) -> Result<T, ToolError> {
  serde_json::from_value(Value::Object(arguments)).map_err(|source| ToolError::InvalidArguments {
    tool: tool.name,
    source,
  })
}
