//! A fake Jira instance for tests that exercise the full request path.

use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{TEST_TOKEN, TEST_USERNAME};

/// Wraps a [`MockServer`] with helpers for the endpoints the server calls.
///
/// Mounted endpoints only answer requests carrying the test credentials, so a
/// client built with other credentials gets wiremock's default 404.
pub struct JiraMockServer {
  server: MockServer,
}

impl JiraMockServer {
  /// Start a fresh fake Jira on a random local port
  pub async fn start() -> Self {
    Self {
      server: MockServer::start().await,
    }
  }

  /// Base URL to configure the client with
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  /// The underlying server, for mounting custom mocks
  pub fn server(&self) -> &MockServer {
    &self.server
  }

  /// Number of requests received so far
  pub async fn request_count(&self) -> usize {
    self.server.received_requests().await.map_or(0, |requests| requests.len())
  }

  /// Answer `GET /rest/api/2/project` with `projects`
  pub async fn mount_projects(&self, projects: Value) {
    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(projects))
      .mount(&self.server)
      .await;
  }

  /// Answer `POST /rest/api/2/search` with `issues`
  pub async fn mount_search(&self, issues: Value) {
    let total = issues.as_array().map_or(0, Vec::len);
    Mock::given(method("POST"))
      .and(path("/rest/api/2/search"))
      .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "startAt": 0,
        "maxResults": 50,
        "total": total,
        "issues": issues
      })))
      .mount(&self.server)
      .await;
  }

  /// Answer `GET /rest/api/2/issue/{key}` with `issue`
  pub async fn mount_issue(&self, key: &str, issue: Value) {
    Mock::given(method("GET"))
      .and(path(format!("/rest/api/2/issue/{key}")))
      .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(issue))
      .mount(&self.server)
      .await;
  }

  /// Answer `GET /rest/api/2/issue/{key}` with a 404
  pub async fn mount_missing_issue(&self, key: &str) {
    Mock::given(method("GET"))
      .and(path(format!("/rest/api/2/issue/{key}")))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
        "errorMessages": ["Issue does not exist or you do not have permission to see it."],
        "errors": {}
      })))
      .mount(&self.server)
      .await;
  }

  /// Answer `GET /rest/api/2/issue/{key}/transitions` with `transitions`
  pub async fn mount_transitions(&self, key: &str, transitions: Value) {
    Mock::given(method("GET"))
      .and(path(format!("/rest/api/2/issue/{key}/transitions")))
      .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transitions": transitions })))
      .mount(&self.server)
      .await;
  }
}
