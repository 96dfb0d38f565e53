//! jira-mcp: MCP server exposing Jira projects, issues, transitions and attachments.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use jira_client::JiraClient;
use jira_client::config::{JiraConfig, parse_timeout};
use jira_mcp::JiraMcpServer;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  version,
  about = "MCP server for Jira projects, issues, transitions and attachments",
  long_about = "MCP server for Jira projects, issues, transitions and attachments.\n\n\
                Connection settings are read from the environment:\n  \
                JIRA_HOST       Jira instance, e.g. company.atlassian.net\n  \
                JIRA_USERNAME   Account email\n  \
                JIRA_API_TOKEN  API token\n  \
                JIRA_TIMEOUT_SECS  Optional request timeout (default 30)"
)]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,

  /// Per-request timeout for Jira calls, overriding JIRA_TIMEOUT_SECS
  #[arg(long = "timeout", value_name = "SECS", value_parser = parse_timeout)]
  timeout: Option<Duration>,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // stdout carries the JSON-RPC stream, so logs go to stderr.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let mut config = JiraConfig::from_env().context("Failed to load Jira configuration")?;
  if let Some(timeout) = cli.timeout {
    config = config.with_timeout(timeout);
  }

  let client = JiraClient::from_config(&config)?;
  info!(host = %config.base_url, timeout_secs = config.timeout.as_secs(), "Starting Jira MCP server");
  let server = JiraMcpServer::new(client);

  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
