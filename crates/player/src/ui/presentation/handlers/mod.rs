//! Handlers - the player's flows
//!
//! `GameClient` owns everything a flow needs (store, services, platform,
//! config) and is generic over the store so every flow can run against an
//! in-memory `SharedStore` in tests. Each submodule adds one family of
//! flows as an `impl` block.

mod bootstrap_handler;
mod chat_handler;
mod game_handler;
mod notification_handler;
mod storybook_handler;
mod training_handler;


use std::sync::Arc;

use dugout_domain::Sender;

use crate::config::PlayerConfig;
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::services::UiServices;
use crate::ui::presentation::state::{ClientStore, TransitionPhase};

pub use storybook_handler::{FADE_IN_MS, FADE_OUT_MS};

/// Generic failure shown when a request never got an answer.
pub(crate) const NETWORK_ERROR: &str = "네트워크 오류가 발생했습니다. 다시 시도해주세요.";

#[derive(Clone)]
pub struct GameClient<S: ClientStore> {
    store: S,
    services: UiServices,
    platform: Arc<dyn PlatformPort>,
    config: Arc<PlayerConfig>,
}

impl<S: ClientStore> GameClient<S> {
    pub fn new(
        store: S,
        services: UiServices,
        platform: Arc<dyn PlatformPort>,
        config: PlayerConfig,
    ) -> Self {
        Self {
            store,
            services,
            platform,
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn platform(&self) -> &Arc<dyn PlatformPort> {
        &self.platform
    }

    fn username(&self) -> &str {
        &self.config.username
    }

    /// Appends a `❌` line to the transcript.
    pub fn show_error(&self, message: &str) {
        self.store.update(|s| {
            s.transcript
                .append(Sender::Bot, format!("❌ {message}"), None);
        });
    }

    async fn wait(&self, ms: u64) {
        self.platform.sleep_ms(ms).await;
    }

    /// Runs `swap` behind the transition layer (fade out, swap, fade in).
    async fn behind_transition<F, Fut, T>(&self, swap: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = T>,
    {
        self.store
            .update(|s| s.transition = TransitionPhase::Covering);
        self.wait(FADE_OUT_MS).await;
        let result = swap().await;
        self.wait(FADE_IN_MS).await;
        self.store.update(|s| s.transition = TransitionPhase::Hidden);
        result
    }
}
