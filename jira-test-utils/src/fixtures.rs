//! JSON payloads in the shape the Jira REST API returns them.

use serde_json::{Value, json};

/// Username the fake Jira expects in basic auth
pub const TEST_USERNAME: &str = "test_user";
/// API token the fake Jira expects in basic auth
pub const TEST_TOKEN: &str = "test_token";

/// A project entry from `GET /rest/api/2/project`
pub fn project_json(id: &str, key: &str, archived: bool) -> Value {
  json!({
    "id": id,
    "key": key,
    "name": format!("{key} project"),
    "archived": archived,
    "projectTypeKey": "software",
    "simplified": false,
    "style": "classic",
    "self": format!("https://test.atlassian.net/rest/api/2/project/{id}")
  })
}

/// An issue with the given `fields` object
pub fn issue_json(id: &str, key: &str, fields: Value) -> Value {
  json!({
    "id": id,
    "key": key,
    "self": format!("https://test.atlassian.net/rest/api/2/issue/{id}"),
    "fields": fields
  })
}

/// A transition entry leading to status `to_id`
pub fn transition_json(id: &str, name: &str, to_id: &str, to_name: &str) -> Value {
  json!({
    "id": id,
    "name": name,
    "hasScreen": false,
    "to": {
      "id": to_id,
      "name": to_name,
      "self": format!("https://test.atlassian.net/rest/api/2/status/{to_id}"),
      "statusCategory": {
        "id": 2,
        "key": "new",
        "name": "To Do"
      }
    }
  })
}

/// An attachment entry from an issue's `attachment` field
pub fn attachment_json(id: &str, filename: &str, size: u64) -> Value {
  json!({
    "id": id,
    "filename": filename,
    "created": "2024-03-01T09:30:00.000+0000",
    "size": size,
    "mimeType": "text/plain",
    "content": format!("https://test.atlassian.net/secure/attachment/{id}/{filename}"),
    "author": {"accountId": "abc-123", "displayName": "Test User"}
  })
}
