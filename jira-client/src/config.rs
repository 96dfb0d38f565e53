//! Connection settings for the Jira client.
//!
//! The server is configured entirely through environment variables. Loading
//! fails if any required variable is missing, and the error lists all of them
//! at once so the operator can fix the environment in one pass.

use std::time::Duration;

use thiserror::Error;
use url::{Position, Url};

use crate::consts::DEFAULT_TIMEOUT;
use crate::models::JiraAuth;

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";
/// Environment variable storing the Jira account name (usually an email).
pub const ENV_JIRA_USERNAME: &str = "JIRA_USERNAME";
/// Environment variable storing the Jira API token or password.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
/// Optional per-request timeout in seconds.
pub const ENV_JIRA_TIMEOUT_SECS: &str = "JIRA_TIMEOUT_SECS";

/// Errors raised while loading the configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Missing required environment variables: {}", .0.join(", "))]
  Missing(Vec<&'static str>),
  #[error("Invalid value for {var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

/// Validated, immutable connection settings
#[derive(Debug, Clone)]
pub struct JiraConfig {
  /// Jira base URL with scheme and without trailing slash
  pub base_url: String,
  pub auth: JiraAuth,
  pub timeout: Duration,
}

impl JiraConfig {
  /// Load the configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Load the configuration through an arbitrary variable lookup.
  ///
  /// Blank values are treated the same as unset ones.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |name: &str| lookup(name).map(|value| value.trim().to_string()).filter(|v| !v.is_empty());

    let host = read(ENV_JIRA_HOST);
    let username = read(ENV_JIRA_USERNAME);
    let api_token = read(ENV_JIRA_API_TOKEN);

    let (host, username, api_token) = match (host, username, api_token) {
      (Some(host), Some(username), Some(api_token)) => (host, username, api_token),
      (host, username, api_token) => {
        let missing = [
          (ENV_JIRA_HOST, host.is_none()),
          (ENV_JIRA_USERNAME, username.is_none()),
          (ENV_JIRA_API_TOKEN, api_token.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();
        return Err(ConfigError::Missing(missing));
      }
    };

    let base_url = ensure_url_scheme(&host).map_err(|reason| ConfigError::Invalid {
      var: ENV_JIRA_HOST,
      reason,
    })?;

    let timeout = match read(ENV_JIRA_TIMEOUT_SECS) {
      Some(raw) => parse_timeout(&raw).map_err(|reason| ConfigError::Invalid {
        var: ENV_JIRA_TIMEOUT_SECS,
        reason,
      })?,
      None => DEFAULT_TIMEOUT,
    };

    Ok(Self {
      base_url,
      auth: JiraAuth { username, api_token },
      timeout,
    })
  }

  /// Replace the request timeout, e.g. from a command line flag
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

/// Parse a positive number of seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, String> {
  match raw.trim().parse::<u64>() {
    Ok(0) => Err("timeout must be greater than zero".to_string()),
    Ok(secs) => Ok(Duration::from_secs(secs)),
    Err(e) => Err(format!("'{raw}' is not a whole number of seconds ({e})")),
  }
}

/// Normalize a URL by removing trailing slashes from the path.
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path().trim_end_matches('/');
  result.push_str(path);

  result
}

/// Parse a URL by prefixing it with https:// scheme.
fn parse_with_https_prefix(input: &str) -> Result<Url, String> {
  Url::parse(&format!("https://{input}")).map_err(|e| format!("failed to parse '{input}' as a URL ({e})"))
}

/// Ensure a host has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Also handles
/// malformed schemes like "https:/example.com" (missing slash).
pub fn ensure_url_scheme(input: &str) -> Result<String, String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err("host cannot be empty".to_string());
  }

  let lowered = trimmed.to_ascii_lowercase();
  for scheme in ["http", "https"] {
    let prefix = format!("{scheme}:");
    if lowered.starts_with(&prefix) && !lowered.starts_with(&format!("{scheme}://")) {
      let remainder = trimmed[prefix.len()..].trim_start_matches('/');
      let url = Url::parse(&format!("{scheme}://{remainder}")).map_err(|e| format!("failed to parse '{input}' ({e})"))?;
      return Ok(normalize_url(&url));
    }
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.has_host() && matches!(url.scheme(), "http" | "https") => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}
