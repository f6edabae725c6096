//! Infrastructure layer - adapters behind the outbound ports

pub mod event_stream;
pub mod http_client;
pub mod platform;
pub mod testing;
