use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::config::JiraConfig;
use crate::consts::{API_PREFIX, DEFAULT_TIMEOUT, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client with the default request timeout
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
  }

  /// Create a new Jira client whose requests give up after `timeout`
  pub fn with_timeout(base_url: &str, auth: JiraAuth, timeout: Duration) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .timeout(timeout)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    })
  }

  /// Create a client from a validated [`JiraConfig`]
  pub fn from_config(config: &JiraConfig) -> Result<Self> {
    Self::with_timeout(&config.base_url, config.auth.clone(), config.timeout)
  }

  /// Base URL of the Jira instance, without a trailing slash
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) fn endpoint(&self, path: &str) -> String {
    format!("{}{API_PREFIX}{path}", self.base_url)
  }

  /// Start an authenticated request against a REST API path
  pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
    self
      .client
      .request(method, self.endpoint(path))
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }

  /// Start an authenticated request against `/issue/{issue_key}/{tail..}`.
  ///
  /// The key always occupies exactly one path segment: `/`, `?` and `#` are
  /// percent-encoded and dot segments are refused.
  pub(crate) fn issue_request(&self, method: Method, issue_key: &str, tail: &[&str]) -> Result<RequestBuilder> {
    if matches!(issue_key.trim(), "" | "." | "..") {
      bail!("Invalid issue key '{issue_key}'");
    }

    let mut url = Url::parse(&self.endpoint("/issue")).context("Invalid Jira base URL")?;
    url
      .path_segments_mut()
      .map_err(|()| anyhow!("Jira base URL {} cannot take a path", self.base_url))?
      .push(issue_key)
      .extend(tail);

    Ok(
      self
        .client
        .request(method, url)
        .basic_auth(&self.auth.username, Some(&self.auth.api_token)),
    )
  }
}

/// Convert a non-success response into an error.
///
/// `not_found` supplies the message used for HTTP 404, which differs per
/// resource.
pub(crate) async fn status_error(response: Response, not_found: impl FnOnce() -> String) -> anyhow::Error {
  match response.status() {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      anyhow!("Authentication failed. Please check your Jira credentials.")
    }
    StatusCode::NOT_FOUND => anyhow!(not_found()),
    status => anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    ),
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
