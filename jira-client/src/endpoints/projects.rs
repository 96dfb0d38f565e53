//! # Jira Project Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, status_error};
use crate::models::JiraProject;

impl JiraClient {
  /// List every project visible to the user, archived ones included.
  ///
  /// The order is whatever Jira returns.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_projects(&self) -> Result<Vec<JiraProject>> {
    let response = self
      .request(Method::GET, "/project")
      .query(&[("includeArchived", "true")])
      .send()
      .await
      .context("Failed to fetch Jira projects")?;

    debug!("Jira API response status: {}", response.status());
    match response.status() {
      StatusCode::OK => response
        .json::<Vec<JiraProject>>()
        .await
        .context("Failed to parse Jira projects"),
      _ => Err(status_error(response, || "Project list not found".to_string()).await),
    }
  }
}

#[cfg(test)]
mod tests {
  use jira_test_utils::{TEST_TOKEN, TEST_USERNAME, project_json};
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_get_projects() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_USERNAME, TEST_TOKEN)?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .and(query_param("includeArchived", "true"))
      .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        project_json("10000", "ACTIVE", false),
        project_json("10001", "OLD", true),
        {"id": "10002", "key": "BARE", "name": "Bare"}
      ])))
      .mount(&mock_server)
      .await;

    let projects = client.get_projects().await?;
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].key, "ACTIVE");
    assert!(!projects[0].archived);
    assert!(projects[1].archived);
    assert!(!projects[2].archived);
    assert!(projects[2].project_type_key.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_get_projects_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), TEST_USERNAME, "invalid_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let result = client.get_projects().await;
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }
}
