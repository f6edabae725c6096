//! Service providers for the presentation layer
//!
//! Handlers reach the application services through this bundle without
//! naming infrastructure types; the composition root provides one
//! `UiServices` as Dioxus context.

use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{ChatService, GameService, StorybookService, TrainingService};
use crate::ports::outbound::ApiPort;

/// Concrete service bundle type used by the UI.
pub type UiServices = Services<Api>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services<A: ApiPort> {
    pub chat: Arc<ChatService<A>>,
    pub game: Arc<GameService<A>>,
    pub storybook: Arc<StorybookService<A>>,
    pub training: Arc<TrainingService<A>>,
}

impl<A: ApiPort + Clone> Services<A> {
    pub fn new(api: A) -> Self {
        Self {
            chat: Arc::new(ChatService::new(api.clone())),
            game: Arc::new(GameService::new(api.clone())),
            storybook: Arc::new(StorybookService::new(api.clone())),
            training: Arc::new(TrainingService::new(api)),
        }
    }
}
