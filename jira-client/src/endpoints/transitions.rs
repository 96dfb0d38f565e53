use anyhow::{Context, Result, anyhow};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, status_error};
use crate::models::{JiraTransition, JiraTransitions, TransitionId, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>> {
    let response = self
      .issue_request(Method::GET, issue_key, &["transitions"])?
      .send()
      .await
      .context("Failed to fetch Jira transitions")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::OK => {
        let transitions = response
          .json::<JiraTransitions>()
          .await
          .context("Failed to parse Jira transitions")?;
        Ok(transitions.transitions)
      }
      _ => Err(status_error(response, || format!("Issue {issue_key} not found")).await),
    }
  }

  /// Transition an issue to a new status
  #[instrument(skip(self), level = "debug")]
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<()> {
    let payload = TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    };

    let response = self
      .issue_request(Method::POST, issue_key, &["transitions"])?
      .json(&payload)
      .send()
      .await
      .context("Failed to transition Jira issue")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      StatusCode::BAD_REQUEST => Err(anyhow!(
        "Invalid transition. The transition may not be available for the current status."
      )),
      _ => Err(status_error(response, || format!("Issue {issue_key} not found")).await),
    }
  }
}
