//! Dugout Shared - wire contract between the game server and the player
//!
//! This crate contains everything the player needs to talk to the server:
//! - Request bodies for every POST endpoint
//! - Response envelopes for every endpoint
//! - Endpoint path builders (with percent-encoded query values)
//! - The SSE stream event type and its incremental decoder
//!
//! # Design Principles
//!
//! 1. **No I/O** - transports live in the player's infrastructure layer
//! 2. **Lenient decoding** - unknown fields are ignored, missing ones default
//! 3. **WASM compatible** - must compile for both native and wasm32 targets

pub mod requests;
pub mod responses;
pub mod routes;
pub mod stream;

pub use requests::{
    ChatRequest, EventChoiceRequest, MonthStartRequest, StorybookCompleteRequest,
    TrainingRequest, UsernameRequest,
};
pub use responses::{
    AdvanceResponse, ChatMetadata, ChatReply, CurrentStorybookResponse, DebugInfo, EventCheck,
    EventChoiceResponse, FullResponse, HintsResponse, MomentsResponse, MonthStartResponse,
    NextAction, ReplyBody, StatChangeReport, StatsResponse, StorybookCompleteResponse,
    StorybookResponse, TrainingResponse,
};
pub use stream::{SseDecoder, StreamDecodeError, StreamEvent};
