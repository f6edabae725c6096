//! Endpoint paths, relative to the configured base URL.

use url::form_urlencoded;

pub const CHAT: &str = "/api/chat";
pub const CHAT_STREAM: &str = "/api/chat/stream";
pub const CHAT_MONTH_START: &str = "/api/chat/month-start";
pub const GAME_ADVANCE: &str = "/api/game/advance";
pub const GAME_EVENT_CHOICE: &str = "/api/game/event-choice";
pub const TRAINING: &str = "/api/training";
pub const STORYBOOK_COMPLETE: &str = "/api/storybook/complete";

fn with_username(path: &str, username: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .finish();
    format!("{path}?{query}")
}

pub fn stats(username: &str) -> String {
    with_username("/api/game/stats", username)
}

pub fn hints(username: &str) -> String {
    with_username("/api/game/hints", username)
}

pub fn moments(username: &str) -> String {
    with_username("/api/game/moments", username)
}

/// Older servers expose moments outside the `/api/game` prefix.
pub fn moments_fallback(username: &str) -> String {
    with_username("/api/moments", username)
}

pub fn storybook(id: &str, username: &str) -> String {
    let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    with_username(&format!("/api/storybook/{id}"), username)
}

pub fn current_storybook(username: &str) -> String {
    with_username("/api/storybook/current", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_percent_encoded() {
        assert_eq!(
            stats("사용자 1"),
            "/api/game/stats?username=%EC%82%AC%EC%9A%A9%EC%9E%90+1"
        );
        assert_eq!(hints("a&b"), "/api/game/hints?username=a%26b");
    }

    #[test]
    fn storybook_id_is_a_path_segment() {
        assert_eq!(
            storybook("5_main_event", "kim"),
            "/api/storybook/5_main_event?username=kim"
        );
        assert_eq!(
            storybook("a/b", "kim"),
            "/api/storybook/a%2Fb?username=kim"
        );
    }
}
