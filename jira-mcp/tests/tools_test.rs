//! End-to-end tool calls through the server against a fake Jira.

use jira_mcp::JiraMcpServer;
use jira_test_utils::{JiraMockServer, TEST_TOKEN, TEST_USERNAME, attachment_json, issue_json, project_json, transition_json};
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn server_for(jira: &JiraMockServer) -> JiraMcpServer {
  JiraMcpServer::new(jira_client::create_jira_client(&jira.uri(), TEST_USERNAME, TEST_TOKEN).unwrap())
}

fn args(value: Value) -> Option<JsonObject> {
  value.as_object().cloned()
}

fn text(result: &CallToolResult) -> &str {
  assert_eq!(result.content.len(), 1);
  result.content[0].as_text().map(|t| t.text.as_str()).unwrap()
}

fn payload(result: &CallToolResult) -> Value {
  assert_eq!(result.is_error, None, "unexpected error: {}", text(result));
  serde_json::from_str(text(result)).unwrap()
}

#[tokio::test]
async fn test_get_tasks_renders_pretty_projection() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_search(json!([issue_json(
      "10001",
      "TEST-1",
      json!({"summary": "Fix login", "status": {"name": "To Do"}})
    )]))
    .await;

  let result = server_for(&jira)
    .handle_call("getTasks", args(json!({"jql": "project = TEST"})))
    .await;

  assert_eq!(result.is_error, None);
  assert_eq!(
    text(&result),
    r#"[
  {
    "id": "10001",
    "key": "TEST-1",
    "summary": "Fix login",
    "status": {
      "name": "To Do"
    }
  }
]"#
  );
}

#[tokio::test]
async fn test_get_tasks_sends_requested_fields() {
  let jira = JiraMockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/rest/api/2/search"))
    .and(basic_auth(TEST_USERNAME, TEST_TOKEN))
    .and(body_json(json!({"jql": "project = TEST", "fields": ["summary"]})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "total": 1,
      "issues": [issue_json("10001", "TEST-1", json!({"summary": "Fix bug"}))]
    })))
    .expect(1)
    .mount(jira.server())
    .await;

  let result = server_for(&jira)
    .handle_call("getTasks", args(json!({"jql": "project = TEST", "fields": ["summary"]})))
    .await;

  assert_eq!(payload(&result), json!([{"id": "10001", "key": "TEST-1", "summary": "Fix bug"}]));
}

#[tokio::test]
async fn test_get_tasks_with_invalid_jql() {
  let jira = JiraMockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/rest/api/2/search"))
    .respond_with(ResponseTemplate::new(400).set_body_string("Error in the JQL Query"))
    .mount(jira.server())
    .await;

  let result = server_for(&jira)
    .handle_call("getTasks", args(json!({"jql": "project = = TEST"})))
    .await;

  assert_eq!(result.is_error, Some(true));
  assert!(text(&result).starts_with("Invalid JQL query 'project = = TEST'"));
}

#[tokio::test]
async fn test_get_projects_without_archived_is_subset_of_all() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_projects(json!([
      project_json("1", "LIVE", false),
      project_json("2", "OLD", true)
    ]))
    .await;
  let server = server_for(&jira);

  let active = payload(&server.handle_call("getProjects", args(json!({}))).await);
  let all = payload(&server.handle_call("getProjects", args(json!({"archived": true}))).await);

  let active = active.as_array().unwrap();
  let all = all.as_array().unwrap();
  assert_eq!(active.len(), 1);
  assert_eq!(all.len(), 2);
  assert!(active.iter().all(|project| all.contains(project)));
  assert!(active.iter().all(|project| project["archived"] == json!(false)));
}

#[tokio::test]
async fn test_get_task_returns_requested_key() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_issue(
      "TEST-7",
      issue_json(
        "10007",
        "TEST-7",
        json!({
          "summary": "Ship it",
          "priority": {"name": "High"},
          "duedate": null,
          "labels": ["release"]
        }),
      ),
    )
    .await;

  let result = server_for(&jira)
    .handle_call("getTask", args(json!({"taskId": "TEST-7"})))
    .await;

  assert_eq!(
    payload(&result),
    json!({
      "id": "10007",
      "key": "TEST-7",
      "summary": "Ship it",
      "priority": {"name": "High"}
    })
  );
}

#[tokio::test]
async fn test_get_task_with_rejected_credentials() {
  let jira = JiraMockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/rest/api/2/issue/TEST-1"))
    .respond_with(ResponseTemplate::new(401))
    .mount(jira.server())
    .await;

  let result = server_for(&jira)
    .handle_call("getTask", args(json!({"taskId": "TEST-1"})))
    .await;

  assert_eq!(result.is_error, Some(true));
  assert_eq!(text(&result), "Authentication failed. Please check your Jira credentials.");
}

#[tokio::test]
async fn test_update_task_status_moves_issue_to_requested_status() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_transitions(
      "TEST-1",
      json!([
        transition_json("11", "Start", "3", "In Progress"),
        transition_json("31", "Finish", "10001", "Done")
      ]),
    )
    .await;
  Mock::given(method("POST"))
    .and(path("/rest/api/2/issue/TEST-1/transitions"))
    .and(body_json(json!({"transition": {"id": "31"}})))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(jira.server())
    .await;
  jira
    .mount_issue(
      "TEST-1",
      issue_json("10001", "TEST-1", json!({"status": {"id": "10001", "name": "Done"}})),
    )
    .await;

  let result = server_for(&jira)
    .handle_call("updateTaskStatus", args(json!({"taskId": "TEST-1", "statusId": "10001"})))
    .await;

  let summary = payload(&result);
  assert_eq!(summary["key"], "TEST-1");
  assert_eq!(summary["status"]["id"], "10001");
}

#[tokio::test]
async fn test_update_task_status_without_transition_makes_no_change() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_transitions("TEST-1", json!([transition_json("11", "Start", "3", "In Progress")]))
    .await;
  Mock::given(method("POST"))
    .and(path("/rest/api/2/issue/TEST-1/transitions"))
    .respond_with(ResponseTemplate::new(204))
    .expect(0)
    .mount(jira.server())
    .await;

  jira
    .mount_issue(
      "TEST-1",
      issue_json("10001", "TEST-1", json!({"status": {"id": "1", "name": "To Do"}})),
    )
    .await;
  let server = server_for(&jira);

  let result = server
    .handle_call("updateTaskStatus", args(json!({"taskId": "TEST-1", "statusId": "10001"})))
    .await;

  assert_eq!(result.is_error, Some(true));
  assert!(text(&result).contains("TEST-1"));
  assert!(text(&result).contains("10001"));

  let after = payload(&server.handle_call("getTask", args(json!({"taskId": "TEST-1"}))).await);
  assert_eq!(after["status"]["id"], "1");
}

#[tokio::test]
async fn test_task_id_stays_inside_issue_path() {
  let jira = JiraMockServer::start().await;
  jira.mount_projects(json!([project_json("1", "LIVE", false)])).await;

  let result = server_for(&jira)
    .handle_call("getTask", args(json!({"taskId": "../project"})))
    .await;

  assert_eq!(result.is_error, Some(true));
  assert_eq!(text(&result), "Issue ../project not found");
  let requests = jira.server().received_requests().await.unwrap_or_default();
  let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
  assert_eq!(paths, vec!["/rest/api/2/issue/..%2Fproject"]);
}

#[tokio::test]
async fn test_update_task_owner_with_missing_account() {
  let jira = JiraMockServer::start().await;

  let result = server_for(&jira)
    .handle_call("updateTaskOwner", args(json!({"taskId": "TEST-1", "accountId": null})))
    .await;

  assert_eq!(result.is_error, Some(true));
  assert_eq!(text(&result), "Missing required argument(s) for updateTaskOwner: accountId");
  assert_eq!(jira.request_count().await, 0);
}

#[tokio::test]
async fn test_get_available_statuses() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_transitions("TEST-1", json!([transition_json("11", "Start", "3", "In Progress")]))
    .await;

  let result = server_for(&jira)
    .handle_call("getAvailableStatuses", args(json!({"taskId": "TEST-1"})))
    .await;

  assert_eq!(
    payload(&result),
    json!([{
      "id": "11",
      "name": "Start",
      "to": {
        "id": "3",
        "name": "In Progress",
        "statusCategory": {"id": 2, "key": "new", "name": "To Do"}
      }
    }])
  );
}

#[tokio::test]
async fn test_get_task_attachments() {
  let jira = JiraMockServer::start().await;
  jira
    .mount_issue(
      "TEST-1",
      issue_json(
        "10001",
        "TEST-1",
        json!({"attachment": [attachment_json("1", "a.txt", 10), attachment_json("2", "b.txt", 20)]}),
      ),
    )
    .await;
  jira
    .mount_issue("TEST-2", issue_json("10002", "TEST-2", json!({"attachment": []})))
    .await;
  let server = server_for(&jira);

  let listed = payload(&server.handle_call("getTaskAttachments", args(json!({"taskId": "TEST-1"}))).await);
  let filenames: Vec<&str> = listed
    .as_array()
    .unwrap()
    .iter()
    .map(|a| a["filename"].as_str().unwrap())
    .collect();
  assert_eq!(filenames, vec!["a.txt", "b.txt"]);

  let empty = server
    .handle_call("getTaskAttachments", args(json!({"taskId": "TEST-2"})))
    .await;
  assert_eq!(empty.is_error, None);
  assert_eq!(text(&empty), "[]");
}

#[tokio::test]
async fn test_unknown_tool_names_the_tool() {
  let jira = JiraMockServer::start().await;

  let result = server_for(&jira).handle_call("doSomething", args(json!({}))).await;

  assert_eq!(result.is_error, Some(true));
  assert!(text(&result).contains("doSomething"));
  assert_eq!(jira.request_count().await, 0);
}
