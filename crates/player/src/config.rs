//! Player configuration
//!
//! Desktop builds read the environment (after loading `.env`); the web build
//! derives everything from the page URL it was served from.

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_USERNAME: &str = "사용자";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Game server base URL, without a trailing slash
    pub api_base_url: String,
    /// Player name sent with every request
    pub username: String,
    /// Use `/api/chat/stream`; `false` falls back to the one-shot `/api/chat`
    pub streaming: bool,
    pub request_timeout_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            streaming: true,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from a key lookup (the environment, in practice).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = match non_empty("DUGOUT_API_URL") {
            Some(raw) => {
                Url::parse(&raw).context("DUGOUT_API_URL must be an absolute URL")?;
                raw.trim_end_matches('/').to_string()
            }
            None => defaults.api_base_url,
        };

        let streaming = match non_empty("DUGOUT_STREAMING") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("DUGOUT_STREAMING must be true or false, got '{raw}'"))?,
            None => defaults.streaming,
        };

        let request_timeout_ms = match non_empty("DUGOUT_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .parse()
                .context("DUGOUT_REQUEST_TIMEOUT_MS must be a number of milliseconds")?,
            None => defaults.request_timeout_ms,
        };

        Ok(Self {
            api_base_url,
            username: non_empty("DUGOUT_USERNAME").unwrap_or(defaults.username),
            streaming,
            request_timeout_ms,
        })
    }

    /// Web build: same-origin API, username from `?username=`.
    pub fn from_page_url(href: &str) -> Result<Self> {
        let url = Url::parse(href).context("page URL is not valid")?;
        let defaults = Self::default();

        let mut config = Self {
            api_base_url: url.origin().ascii_serialization(),
            ..defaults
        };
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "username" if !value.trim().is_empty() => config.username = value.trim().to_string(),
                "streaming" => config.streaming = parse_flag(&value).unwrap_or(true),
                _ => {}
            }
        }
        Ok(config)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Result<Self> {
        let href = web_sys::window()
            .context("no window")?
            .location()
            .href()
            .map_err(|_| anyhow::anyhow!("cannot read window.location"))?;
        Self::from_page_url(&href)
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(PlayerConfig::from_lookup(lookup(&[])).unwrap(), PlayerConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = PlayerConfig::from_lookup(lookup(&[
            ("DUGOUT_API_URL", "https://game.example.com/"),
            ("DUGOUT_USERNAME", "코치"),
            ("DUGOUT_STREAMING", "false"),
            ("DUGOUT_REQUEST_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://game.example.com");
        assert_eq!(config.username, "코치");
        assert!(!config.streaming);
        assert_eq!(config.request_timeout_ms, 5000);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(PlayerConfig::from_lookup(lookup(&[("DUGOUT_STREAMING", "maybe")])).is_err());
        assert!(PlayerConfig::from_lookup(lookup(&[("DUGOUT_API_URL", "localhost")])).is_err());
        assert!(
            PlayerConfig::from_lookup(lookup(&[("DUGOUT_REQUEST_TIMEOUT_MS", "soon")])).is_err()
        );
    }

    #[test]
    fn page_url_gives_origin_and_username() {
        let config =
            PlayerConfig::from_page_url("http://127.0.0.1:5000/chat?username=%EB%AF%BC%EC%A4%80")
                .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.username, "민준");
        assert!(config.streaming);
    }

    #[test]
    fn page_url_without_username_keeps_default() {
        let config = PlayerConfig::from_page_url("https://dugout.example/?username=").unwrap();
        assert_eq!(config.username, DEFAULT_USERNAME);
        assert_eq!(config.api_base_url, "https://dugout.example");
    }
}
