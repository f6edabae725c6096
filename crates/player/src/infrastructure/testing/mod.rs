//! Test-only infrastructure fakes.
//!
//! These helpers implement outbound ports for unit tests (services and
//! handlers), so flows run without a server or a DOM.

pub mod fake_api;
pub mod fixtures;

pub use fake_api::{FakeApi, RecordedCall, Scripted};
