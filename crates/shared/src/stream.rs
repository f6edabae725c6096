//! Server-Sent Events decoding for `/api/chat/stream`
//!
//! The server writes one `data: {"type": ..., "content": ...}` record per
//! event, separated by a blank line. Network chunks split records (and
//! multi-byte characters) arbitrarily, so the decoder buffers raw bytes and
//! only decodes text once a whole record has arrived.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use dugout_domain::TriggeredEvent;

use crate::responses::{ChatMetadata, FullResponse};

/// A decoded stream record.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Next piece of the reply text
    Token(String),
    /// Stats, event and hint for the finished reply
    Metadata(ChatMetadata),
    EventUpdate(TriggeredEvent),
    HintUpdate(String),
    /// Scripted reply delivered in one record
    FullResponse(FullResponse),
    Done,
    /// Server-side failure message, shown to the player
    Error(String),
    /// Record type this client does not know
    Unknown(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamDecodeError {
    #[error("stream record is not valid UTF-8")]
    InvalidUtf8,

    #[error("malformed stream record: {0}")]
    InvalidJson(String),

    #[error("stream record has no type")]
    MissingType,

    #[error("invalid content for '{kind}' record: {message}")]
    InvalidContent { kind: String, message: String },
}

#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    content: Value,
}

impl StreamEvent {
    /// Parses the JSON payload of one record.
    pub fn parse(payload: &str) -> Result<Self, StreamDecodeError> {
        let raw: RawRecord = serde_json::from_str(payload)
            .map_err(|e| StreamDecodeError::InvalidJson(e.to_string()))?;
        let kind = raw.kind.ok_or(StreamDecodeError::MissingType)?;

        let event = match kind.as_str() {
            "token" => Self::Token(text_content(&kind, raw.content)?),
            "metadata" => Self::Metadata(typed_content(&kind, raw.content)?),
            "event_update" => Self::EventUpdate(typed_content(&kind, raw.content)?),
            "hint_update" => Self::HintUpdate(text_content(&kind, raw.content)?),
            "full_response" => Self::FullResponse(typed_content(&kind, raw.content)?),
            "done" => Self::Done,
            "error" => Self::Error(match raw.content {
                Value::String(message) if !message.is_empty() => message,
                _ => "알 수 없는 오류가 발생했습니다.".to_string(),
            }),
            _ => Self::Unknown(kind),
        };
        Ok(event)
    }
}

fn text_content(kind: &str, content: Value) -> Result<String, StreamDecodeError> {
    match content {
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        other => Err(StreamDecodeError::InvalidContent {
            kind: kind.to_string(),
            message: format!("expected a string, got {other}"),
        }),
    }
}

fn typed_content<T: for<'de> Deserialize<'de>>(
    kind: &str,
    content: Value,
) -> Result<T, StreamDecodeError> {
    serde_json::from_value(content).map_err(|e| StreamDecodeError::InvalidContent {
        kind: kind.to_string(),
        message: e.to_string(),
    })
}

/// Incremental SSE record decoder.
///
/// Feed it chunks as they arrive; each call returns the records completed by
/// that chunk, in order. Call [`SseDecoder::finish`] when the body ends to
/// flush a final record that lacks its blank-line terminator.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Result<StreamEvent, StreamDecodeError>> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        let mut consumed = 0;
        while let Some((end, next)) = find_record_end(&self.buffer[consumed..]) {
            let record = &self.buffer[consumed..consumed + end];
            if let Some(event) = decode_record(record) {
                events.push(event);
            }
            consumed += next;
        }
        self.buffer.drain(..consumed);
        events
    }

    /// Decodes whatever is left in the buffer as a final record.
    pub fn finish(&mut self) -> Option<Result<StreamEvent, StreamDecodeError>> {
        let rest = std::mem::take(&mut self.buffer);
        decode_record(&rest)
    }
}

/// Finds the blank line ending the first record.
///
/// Returns `(record_len, bytes_to_consume)`. Accepts `\n\n` and `\r\n\r\n`
/// (and mixes of the two).
fn find_record_end(buf: &[u8]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < buf.len() {
        if buf[i] == b'\n' {
            match buf.get(i + 1) {
                Some(b'\n') => return Some((i, i + 2)),
                Some(b'\r') if buf.get(i + 2) == Some(&b'\n') => return Some((i, i + 3)),
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Joins the `data:` lines of one record and parses them.
///
/// Records without data (comments, keep-alives, stray blank lines) yield
/// nothing.
fn decode_record(record: &[u8]) -> Option<Result<StreamEvent, StreamDecodeError>> {
    let text = match std::str::from_utf8(record) {
        Ok(text) => text,
        Err(_) => return Some(Err(StreamDecodeError::InvalidUtf8)),
    };

    let mut data: Option<String> = None;
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with(':') {
            continue;
        }
        let Some(value) = line.strip_prefix("data:") else {
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value);
        match data.as_mut() {
            Some(joined) => {
                joined.push('\n');
                joined.push_str(value);
            }
            None => data = Some(value.to_string()),
        }
    }

    let payload = data?;
    if payload.trim().is_empty() {
        return None;
    }
    Some(StreamEvent::parse(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> String {
        format!("data: {value}\n\n")
    }

    fn tokens(events: &[Result<StreamEvent, StreamDecodeError>]) -> String {
        events
            .iter()
            .filter_map(|e| match e {
                Ok(StreamEvent::Token(t)) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_each_record_type() {
        assert_eq!(
            StreamEvent::parse(r#"{"type":"token","content":"안"}"#).unwrap(),
            StreamEvent::Token("안".into())
        );
        assert_eq!(
            StreamEvent::parse(r#"{"type":"done","content":""}"#).unwrap(),
            StreamEvent::Done
        );
        assert_eq!(
            StreamEvent::parse(r#"{"type":"hint_update","content":"쉬어가요"}"#).unwrap(),
            StreamEvent::HintUpdate("쉬어가요".into())
        );
        assert_eq!(
            StreamEvent::parse(r#"{"type":"error","content":"서버 오류"}"#).unwrap(),
            StreamEvent::Error("서버 오류".into())
        );
        assert_eq!(
            StreamEvent::parse(r#"{"type":"typing"}"#).unwrap(),
            StreamEvent::Unknown("typing".into())
        );

        match StreamEvent::parse(
            r#"{"type":"full_response","content":{"reply":"민석이가 화났다","storybook_id":"5_main_event"}}"#,
        )
        .unwrap()
        {
            StreamEvent::FullResponse(full) => {
                assert_eq!(full.storybook_id.as_deref(), Some("5_main_event"))
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(matches!(
            StreamEvent::parse("{not json"),
            Err(StreamDecodeError::InvalidJson(_))
        ));
        assert_eq!(
            StreamEvent::parse(r#"{"content":"x"}"#),
            Err(StreamDecodeError::MissingType)
        );
        assert!(matches!(
            StreamEvent::parse(r#"{"type":"token","content":{"a":1}}"#),
            Err(StreamDecodeError::InvalidContent { .. })
        ));
    }

    #[test]
    fn tokens_survive_every_two_way_split() {
        let body = [
            record(json!({"type": "token", "content": "왜 오셨어요. "})),
            record(json!({"type": "token", "content": "알아서 훈련하겠다고"})),
            record(json!({"type": "token", "content": " 말씀드렸잖아요."})),
            record(json!({"type": "done", "content": ""})),
        ]
        .concat()
        .into_bytes();

        for split in 0..=body.len() {
            let mut decoder = SseDecoder::new();
            let mut events = decoder.feed(&body[..split]);
            events.extend(decoder.feed(&body[split..]));
            assert!(decoder.finish().is_none(), "split at {split}");
            assert_eq!(
                tokens(&events),
                "왜 오셨어요. 알아서 훈련하겠다고 말씀드렸잖아요.",
                "split at {split}"
            );
            assert_eq!(events.last(), Some(&Ok(StreamEvent::Done)));
        }
    }

    #[test]
    fn byte_at_a_time_feed() {
        let body = record(json!({"type": "token", "content": "⚾ 홈런!"}));
        let mut decoder = SseDecoder::new();
        let mut events = Vec::new();
        for byte in body.as_bytes() {
            events.extend(decoder.feed(std::slice::from_ref(byte)));
        }
        assert_eq!(events, vec![Ok(StreamEvent::Token("⚾ 홈런!".into()))]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn tolerates_crlf_comments_and_multiline_data() {
        let body = concat!(
            ": keep-alive\r\n\r\n",
            "event: message\r\n",
            "data: {\"type\":\"token\",\r\n",
            "data: \"content\":\"hi\"}\r\n\r\n",
            "\n\n",
        );
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(body.as_bytes());
        assert_eq!(events, vec![Ok(StreamEvent::Token("hi".into()))]);
    }

    #[test]
    fn malformed_record_does_not_stop_the_stream() {
        let body = format!(
            "data: {{broken\n\n{}{}",
            record(json!({"type": "token", "content": "ok"})),
            record(json!({"type": "done"}))
        );
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(body.as_bytes());
        assert_eq!(events.len(), 3);
        assert!(events[0].is_err());
        assert_eq!(events[1], Ok(StreamEvent::Token("ok".into())));
        assert_eq!(events[2], Ok(StreamEvent::Done));
    }

    #[test]
    fn finish_flushes_unterminated_record() {
        let mut decoder = SseDecoder::new();
        assert!(decoder
            .feed(br#"data: {"type":"token","content":"tail"}"#)
            .is_empty());
        assert_eq!(
            decoder.finish(),
            Some(Ok(StreamEvent::Token("tail".into())))
        );
        assert!(decoder.finish().is_none());
    }

    #[test]
    fn metadata_record_carries_game_state() {
        let body = record(json!({
            "type": "metadata",
            "content": {
                "debug": {"game_state": {"current_month": 5, "stats": {"mental": 61}}},
                "hint": "쉬는 것도 훈련이야"
            }
        }));
        let mut decoder = SseDecoder::new();
        match decoder.feed(body.as_bytes()).remove(0).unwrap() {
            StreamEvent::Metadata(meta) => {
                assert_eq!(meta.game_state().unwrap().stats.mental, Some(61));
                assert_eq!(meta.hint.as_deref(), Some("쉬는 것도 훈련이야"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
