//! Constants for the jira-client crate.

use std::time::Duration;

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jira-mcp/", env!("CARGO_PKG_VERSION"));

/// Request timeout used when `JIRA_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Prefix shared by every REST endpoint the client talks to
pub const API_PREFIX: &str = "/rest/api/2";
