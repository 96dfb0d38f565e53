//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: fetching a single
//! issue and changing its assignee.

use anyhow::{Context, Result, anyhow};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, status_error};
use crate::models::{AssigneeRequest, JiraIssue};

impl JiraClient {
  /// Get a Jira issue by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    let response = self
      .issue_request(Method::GET, issue_key, &[])?
      .send()
      .await
      .context("Failed to fetch Jira issue")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::OK => {
        let issue = response
          .json::<JiraIssue>()
          .await
          .context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      _ => Err(status_error(response, || format!("Issue {issue_key} not found")).await),
    }
  }

  /// Assign an issue to the user with the given account id
  #[instrument(skip(self), level = "debug")]
  pub async fn assign_issue(&self, issue_key: &str, account_id: &str) -> Result<()> {
    let payload = AssigneeRequest {
      account_id: account_id.to_string(),
    };

    let response = self
      .issue_request(Method::PUT, issue_key, &["assignee"])?
      .json(&payload)
      .send()
      .await
      .context("Failed to assign Jira issue")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      StatusCode::BAD_REQUEST => Err(anyhow!(
        "Cannot assign {} to account {}: {}",
        issue_key,
        account_id,
        response.text().await.unwrap_or_default()
      )),
      _ => Err(status_error(response, || format!("Issue {issue_key} not found")).await),
    }
  }
}
