use imagine3d::stream::{append_assistant_text, LineBuffer};
use imagine3d::types::AgentSnapshot;
use serde_json::json;

fn snapshot(value: serde_json::Value) -> AgentSnapshot {
    serde_json::from_value(value).unwrap()
}

#[test]
fn appends_text_of_trailing_assistant_message() {
    let mut acc = String::new();
    let snap = snapshot(json!({
        "messages": [
            { "role": "user", "content": [{ "type": "text", "text": "describe a gear" }] },
            { "role": "assistant", "content": [{ "type": "text", "text": "<model_planning>" }] }
        ]
    }));
    append_assistant_text(&mut acc, &snap);
    assert_eq!(acc, "<model_planning>");
}

#[test]
fn ignores_snapshot_ending_with_user_message() {
    let mut acc = String::new();
    let snap = snapshot(json!({
        "messages": [
            { "role": "assistant", "content": [{ "type": "text", "text": "earlier reply" }] },
            { "role": "user", "content": [{ "type": "text", "text": "follow-up" }] }
        ]
    }));
    append_assistant_text(&mut acc, &snap);
    assert!(acc.is_empty());
}

#[test]
fn ignores_snapshot_with_no_messages() {
    let mut acc = String::new();
    append_assistant_text(&mut acc, &AgentSnapshot::default());
    assert!(acc.is_empty());
}

#[test]
fn concatenates_across_snapshots_in_arrival_order() {
    let mut acc = String::new();
    for text in ["<threejs_output>", "const x = 1;", "</threejs_output>"] {
        let snap = snapshot(json!({
            "messages": [
                { "role": "assistant", "content": [{ "type": "text", "text": text }] }
            ]
        }));
        append_assistant_text(&mut acc, &snap);
    }
    assert_eq!(acc, "<threejs_output>const x = 1;</threejs_output>");
}

#[test]
fn joins_multiple_text_parts_of_one_message() {
    let mut acc = String::new();
    let snap = snapshot(json!({
        "messages": [
            {
                "role": "assistant",
                "content": [
                    { "type": "text", "text": "part one " },
                    { "type": "image", "source": { "type": "base64", "media_type": "image/png", "data": "aGk=" } },
                    { "type": "text", "text": "part two" }
                ]
            }
        ]
    }));
    append_assistant_text(&mut acc, &snap);
    assert_eq!(acc, "part one part two");
}

#[test]
fn line_buffer_reassembles_split_lines() {
    let mut buffer = LineBuffer::new();
    assert!(buffer.push(b"{\"a\":").is_empty());
    let lines = buffer.push(b"1}\n{\"b\":2}\n");
    assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}"]);
}

#[test]
fn line_buffer_strips_carriage_returns() {
    let mut buffer = LineBuffer::new();
    assert_eq!(buffer.push(b"one\r\ntwo\n"), vec!["one", "two"]);
}

#[test]
fn line_buffer_flushes_unterminated_tail() {
    let mut buffer = LineBuffer::new();
    assert!(buffer.push(b"tail without newline").is_empty());
    assert_eq!(buffer.finish().as_deref(), Some("tail without newline"));
}

#[test]
fn line_buffer_finish_is_empty_after_clean_stream() {
    let mut buffer = LineBuffer::new();
    buffer.push(b"complete line\n");
    assert_eq!(buffer.finish(), None);
}

#[test]
fn chunking_does_not_change_the_lines() {
    let payload = b"{\"messages\":[]}\n{\"messages\":[]}\n";

    let mut whole = LineBuffer::new();
    let all_at_once = whole.push(payload);

    let mut split = LineBuffer::new();
    let mut one_byte_at_a_time = Vec::new();
    for byte in payload {
        one_byte_at_a_time.extend(split.push(std::slice::from_ref(byte)));
    }

    assert_eq!(all_at_once, one_byte_at_a_time);
}
