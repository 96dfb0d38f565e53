//! # Jira MCP Server
//!
//! Model Context Protocol server exposing a Jira Cloud instance to AI
//! assistants. Seven tools cover project listing, JQL search, issue lookup,
//! workflow transitions, assignment and attachment listing.
//!
//! Every tool call produces a text envelope. Failures, including unknown tool
//! names and missing arguments, are reported inside the envelope with
//! `isError: true` and never surface as protocol errors.

pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod params;
pub mod projection;
pub mod registry;
pub mod server;

pub use dispatch::Dispatcher;
pub use envelope::ToolEnvelope;
pub use error::ToolError;
pub use server::JiraMcpServer;
