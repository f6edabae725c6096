use crate::config::PlayerConfig;
use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::components::{
    ChatPanel, HintsModal, MomentsModal, NotificationStack, OnboardingModal, StatSidebar,
    StorybookView, TerminalAlert, TrainingModal, TransitionLayer,
};
use presentation::handlers::GameClient;
use presentation::services::UiServices;
use presentation::state::{ClientState, SignalStore};

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// The client every component drives flows through.
pub type UiClient = GameClient<SignalStore>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

/// Hook to access the game client from Dioxus context
pub fn use_client() -> UiClient {
    use_context::<UiClient>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let services = use_context::<UiServices>();
    let config = use_context::<PlayerConfig>();
    let platform = use_platform();

    // The signal must be created inside an active Dioxus runtime.
    let state = use_signal(ClientState::new);
    let client = use_context_provider(move || {
        GameClient::new(SignalStore::new(state), services, platform, config)
    });

    use_future(move || {
        let client = client.clone();
        async move {
            client.on_page_load().await;
        }
    });

    let storybook_active = state.read().viewer.is_active();

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/dugout.css"),
        }

        div {
            class: "app-container",

            StatSidebar {}

            main {
                class: "main-area",
                if storybook_active {
                    StorybookView {}
                } else {
                    ChatPanel {}
                }
            }
        }

        NotificationStack {}
        TrainingModal {}
        HintsModal {}
        MomentsModal {}
        OnboardingModal {}
        TransitionLayer {}
        TerminalAlert {}
    }
}
