use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One agent state snapshot whose trailing message has the given role and a
/// single text part.
pub fn snapshot(role: &str, text: &str) -> Value {
    json!({
        "messages": [
            {
                "role": role,
                "content": [
                    { "type": "text", "text": text }
                ]
            }
        ]
    })
}

/// Joins snapshots into a newline-delimited JSON response body.
pub fn ndjson(snapshots: &[Value]) -> String {
    let mut body = String::new();
    for snapshot in snapshots {
        body.push_str(&snapshot.to_string());
        body.push('\n');
    }
    body
}

/// Mounts the agent streaming endpoint, replying with the given NDJSON body.
pub async fn mock_agent_stream(server: &MockServer, body: String) {
    Mock::given(method("POST"))
        .and(path("/v1/agent/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
        .mount(server)
        .await;
}
