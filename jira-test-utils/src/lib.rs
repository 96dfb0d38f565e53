//! Test utilities shared across the workspace
//!
//! This crate provides common testing infrastructure including:
//! - JSON fixtures shaped like Jira REST API payloads ([`fixtures`])
//! - A wiremock-backed Jira fake with endpoint helpers ([`JiraMockServer`])

pub mod fixtures;
pub mod server;

// Re-export commonly used items
pub use fixtures::{TEST_TOKEN, TEST_USERNAME, attachment_json, issue_json, project_json, transition_json};
pub use server::JiraMockServer;
