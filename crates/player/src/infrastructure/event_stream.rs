//! Lazy adapter from a response byte stream to decoded stream events.
//!
//! Malformed records are logged and skipped; the stream only ends early on a
//! transport error, which is yielded once as `Err`.

use std::collections::VecDeque;

use futures_util::stream::{self, Stream, StreamExt};

use dugout_shared::{SseDecoder, StreamDecodeError, StreamEvent};

use crate::ports::outbound::{ApiError, ByteStream};

struct DecodeState {
    bytes: Option<ByteStream>,
    decoder: SseDecoder,
    ready: VecDeque<StreamEvent>,
}

impl DecodeState {
    fn queue(&mut self, records: impl IntoIterator<Item = Result<StreamEvent, StreamDecodeError>>) {
        for record in records {
            match record {
                Ok(event) => self.ready.push_back(event),
                Err(e) => tracing::warn!(error = %e, "Skipping malformed stream record"),
            }
        }
    }
}

/// Decodes `bytes` into events, in arrival order.
pub fn decode_events(bytes: ByteStream) -> impl Stream<Item = Result<StreamEvent, ApiError>> {
    let state = DecodeState {
        bytes: Some(bytes),
        decoder: SseDecoder::new(),
        ready: VecDeque::new(),
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(event) = state.ready.pop_front() {
                return Some((Ok(event), state));
            }

            let bytes = state.bytes.as_mut()?;
            let next = bytes.next().await;
            match next {
                Some(Ok(chunk)) => {
                    let records = state.decoder.feed(&chunk);
                    state.queue(records);
                }
                Some(Err(e)) => {
                    state.bytes = None;
                    return Some((Err(e), state));
                }
                None => {
                    state.bytes = None;
                    let tail = state.decoder.finish();
                    state.queue(tail);
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream::iter;

    fn ok(bytes: &[u8]) -> Result<Vec<u8>, ApiError> {
        Ok(bytes.to_vec())
    }

    fn chunks(parts: Vec<Result<Vec<u8>, ApiError>>) -> ByteStream {
        iter(parts).boxed()
    }

    async fn collect(bytes: ByteStream) -> Vec<Result<StreamEvent, ApiError>> {
        decode_events(bytes).collect().await
    }

    #[tokio::test]
    async fn yields_events_across_chunk_boundaries() {
        let events = collect(chunks(vec![
            ok(b"data: {\"type\":\"token\",\"con"),
            ok(b"tent\":\"\xEC\x95"),
            ok(b"\x88\"}\n\ndata: {\"type\":\"done\"}\n\n"),
        ]))
        .await;
        assert_eq!(
            events,
            vec![Ok(StreamEvent::Token("안".into())), Ok(StreamEvent::Done)]
        );
    }

    #[tokio::test]
    async fn skips_malformed_records() {
        let events = collect(chunks(vec![ok(
            b"data: nope\n\ndata: {\"type\":\"token\",\"content\":\"ok\"}\n\n",
        )]))
        .await;
        assert_eq!(events, vec![Ok(StreamEvent::Token("ok".into()))]);
    }

    #[tokio::test]
    async fn flushes_the_unterminated_tail() {
        let events = collect(chunks(vec![ok(
            b"data: {\"type\":\"token\",\"content\":\"tail\"}",
        )]))
        .await;
        assert_eq!(events, vec![Ok(StreamEvent::Token("tail".into()))]);
    }

    #[tokio::test]
    async fn transport_error_ends_the_stream() {
        let events = collect(chunks(vec![
            ok(b"data: {\"type\":\"token\",\"content\":\"a\"}\n\n"),
            Err(ApiError::StreamError("reset".into())),
            ok(b"data: {\"type\":\"token\",\"content\":\"b\"}\n\n"),
        ]))
        .await;
        assert_eq!(
            events,
            vec![
                Ok(StreamEvent::Token("a".into())),
                Err(ApiError::StreamError("reset".into()))
            ]
        );
    }
}
