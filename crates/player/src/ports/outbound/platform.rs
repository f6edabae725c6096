//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Handlers and components remain platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Flows are testable with a manual clock and in-memory storage
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`. This module only holds trait definitions.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used for the cosmetic delays (notification expiry, transition fades,
/// the pause before the opening message) without `#[cfg]` branches.
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// Client-local flags; everything else about the game lives on the server.
pub mod storage_keys {
    /// Set once the tutorial was closed with "don't show again"
    pub const ONBOARDING_COMPLETED: &str = "onboarding_completed";
    /// Set once the March guide card has been shown
    pub const MARCH_GUIDE_SHOWN: &str = "march_guide_shown";
}
