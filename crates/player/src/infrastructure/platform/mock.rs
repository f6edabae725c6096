//! Mock platform for tests
//!
//! A manually advanced clock, sleeps that complete immediately (while
//! recording the requested durations) and in-memory storage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{SleepProvider, StorageProvider, TimeProvider};
use crate::state::Platform;

#[derive(Clone, Default)]
pub struct MockTimeProvider {
    now: Arc<AtomicU64>,
}

impl MockTimeProvider {
    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Completes immediately and advances the paired clock by the slept time.
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    clock: MockTimeProvider,
    slept: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    /// Every duration passed to `sleep_ms`, in call order.
    pub fn slept(&self) -> Vec<u64> {
        self.slept.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut slept) = self.slept.lock() {
            slept.push(ms);
        }
        self.clock.advance(ms);
        Box::pin(std::future::ready(()))
    }
}

#[derive(Clone, Default)]
pub struct MockStorageProvider {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// Handles to the providers behind a mock [`Platform`].
#[derive(Clone, Default)]
pub struct MockPlatformHandles {
    pub time: MockTimeProvider,
    pub sleep: MockSleepProvider,
    pub storage: MockStorageProvider,
}

/// Builds a mock platform; the handles stay connected to it.
pub fn create_mock_platform() -> (Platform, MockPlatformHandles) {
    let time = MockTimeProvider::default();
    let handles = MockPlatformHandles {
        sleep: MockSleepProvider {
            clock: time.clone(),
            slept: Arc::default(),
        },
        time,
        storage: MockStorageProvider::default(),
    };
    let platform = Platform::new(
        handles.time.clone(),
        handles.sleep.clone(),
        handles.storage.clone(),
    );
    (platform, handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[tokio::test]
    async fn sleeping_advances_the_clock() {
        let (platform, handles) = create_mock_platform();
        handles.time.set(1_000);
        platform.sleep_ms(500).await;
        assert_eq!(platform.now_millis(), 1_500);
        assert_eq!(handles.sleep.slept(), vec![500]);
    }

    #[test]
    fn storage_is_shared_with_handles() {
        let (platform, handles) = create_mock_platform();
        platform.storage_save("march_guide_shown", "true");
        assert_eq!(handles.storage.load("march_guide_shown").as_deref(), Some("true"));
        platform.storage_remove("march_guide_shown");
        assert_eq!(platform.storage_load("march_guide_shown"), None);
    }
}
