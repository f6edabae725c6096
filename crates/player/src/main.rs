//! Dugout Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dugout_player::ports::outbound::{PlatformPort, RawApiPort};
use dugout_player::PlayerConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dugout_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, using defaults");
            PlayerConfig::default()
        }
    };
    tracing::info!(
        api = %config.api_base_url,
        username = %config.username,
        streaming = config.streaming,
        "Starting Dugout Player"
    );

    // Platform
    let platform = dugout_player::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP
    let raw_api: std::sync::Arc<dyn RawApiPort> = std::sync::Arc::new(
        dugout_player::infrastructure::http_client::HttpApiClient::new(
            &config.api_base_url,
            config.request_timeout(),
        ),
    );
    let api = dugout_player::application::api::Api::new(raw_api);

    launch(platform, api, config);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<PlayerConfig> {
    PlayerConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<PlayerConfig> {
    PlayerConfig::from_location()
}

#[cfg(any(target_arch = "wasm32", feature = "desktop"))]
fn launch(
    platform: std::sync::Arc<dyn PlatformPort>,
    api: dugout_player::application::api::Api,
    config: PlayerConfig,
) {
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Dugout"));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(dugout_player::presentation::Services::new(api))
        .with_context(config)
        .launch(dugout_player::app);
}

#[cfg(not(any(target_arch = "wasm32", feature = "desktop")))]
fn launch(
    _platform: std::sync::Arc<dyn PlatformPort>,
    _api: dugout_player::application::api::Api,
    _config: PlayerConfig,
) {
    tracing::error!("Built without a renderer; rebuild with `--features desktop`");
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/dugout.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
