//! # Jira Search Endpoint
//!
//! Runs JQL queries. Only the first page of results is returned; the server
//! decides the page size.

use anyhow::{Context, Result, anyhow};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, status_error};
use crate::models::{JiraIssue, JiraSearchRequest, JiraSearchResults};

impl JiraClient {
  /// Search issues with JQL, fetching only `fields` for each issue
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, jql: &str, fields: &[String]) -> Result<Vec<JiraIssue>> {
    let payload = JiraSearchRequest {
      jql: jql.to_string(),
      fields: fields.to_vec(),
    };

    let response = self
      .request(Method::POST, "/search")
      .json(&payload)
      .send()
      .await
      .context("Failed to search Jira issues")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<JiraSearchResults>()
          .await
          .context("Failed to parse Jira search results")?;
        debug!(returned = results.issues.len(), total = ?results.total, "Search completed");
        Ok(results.issues)
      }
      StatusCode::BAD_REQUEST => Err(anyhow!(
        "Invalid JQL query '{}': {}",
        jql,
        response.text().await.unwrap_or_default()
      )),
      _ => Err(status_error(response, || "Search endpoint not found".to_string()).await),
    }
  }
}
