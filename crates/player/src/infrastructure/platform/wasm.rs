//! WASM platform implementations
//!
//! Browser-backed providers: `js_sys::Date` for time, `gloo-timers` for
//! sleeping and `localStorage` for the client flags.

use crate::ports::outbound::platform::{SleepProvider, StorageProvider, TimeProvider};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// Browser time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Browser sleep provider using `setTimeout`
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        })
    }
}

/// Browser storage provider backed by `window.localStorage`
///
/// Storage may be unavailable (private mode, disabled cookies); every
/// operation then degrades to a logged no-op.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage unavailable, dropping key {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmTimeProvider, WasmSleepProvider, WasmStorageProvider)
}
