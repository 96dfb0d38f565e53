//! # Jira API Client
//!
//! Provides the slice of the Jira REST API that the MCP server exposes as
//! tools: project listing, JQL search, issue lookup, workflow transitions and
//! assignee updates. Configuration is read from the environment by
//! [`JiraConfig`].

mod client;
pub mod config;
mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use config::{ConfigError, JiraConfig};
// Re-export models
pub use models::{
  AssigneeRequest, JiraAttachment, JiraAuth, JiraIssue, JiraIssueFields, JiraProject, JiraSearchRequest,
  JiraSearchResults, JiraTransition, JiraTransitionTarget, JiraTransitions, TransitionId, TransitionRequest,
};
