//! PlatformPort - Unified platform services interface
//!
//! Abstracts the `Platform` DI container so handlers can be driven by a mock
//! platform in tests.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Implemented by `state::Platform`. Use via Dioxus context:
/// `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);
}
