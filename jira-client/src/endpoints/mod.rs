//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: projects, JQL search,
//! issues (including assignment) and workflow transitions.

pub mod issues;
pub mod projects;
pub mod search;
pub mod transitions;
