//! Presentation state
//!
//! `ClientState` holds the whole page; `ClientStore` is how handlers and
//! components reach it.

mod client_state;
mod store;

pub use client_state::{ClientState, TransitionPhase};
pub use store::{ClientStore, SharedStore, SignalStore};
