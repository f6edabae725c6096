//! Simple test fixtures used across unit tests.

use serde_json::{json, Value};

use crate::ports::outbound::ApiError;

pub fn api_request_failed(msg: &str) -> ApiError {
    ApiError::RequestFailed(msg.to_string())
}

/// One `data:` record of a chat stream.
pub fn sse_record(kind: &str, content: Value) -> Vec<u8> {
    format!("data: {}\n\n", json!({"type": kind, "content": content})).into_bytes()
}

pub fn storybook_json(id: &str, pages: usize) -> Value {
    let pages: Vec<Value> = (1..=pages)
        .map(|n| json!({"text": format!("{id} page {n}"), "image": format!("/static/{id}_{n}.png")}))
        .collect();
    json!({"id": id, "title": format!("{id} title"), "pages": pages})
}

pub fn storybook_response(id: &str, pages: usize) -> Value {
    json!({"success": true, "storybook": storybook_json(id, pages)})
}

pub fn stats_response(month: u32, intimacy: i32) -> Value {
    json!({
        "success": true,
        "month": month,
        "intimacy_level": "친해지는 중",
        "stats": {
            "intimacy": intimacy,
            "mental": 50,
            "stamina": 60,
            "power": 40,
            "speed": 45,
            "defense": 35
        }
    })
}
