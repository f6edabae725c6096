//! HTTP adapters implementing `RawApiPort`
//!
//! The correct client is selected at compile time based on the target architecture.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopApiClient as HttpApiClient;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmApiClient as HttpApiClient;

/// Joins the configured base URL and an endpoint path.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slash() {
        assert_eq!(
            join_url("http://localhost:5000/", "/api/chat"),
            "http://localhost:5000/api/chat"
        );
        assert_eq!(join_url("", "/api/chat"), "/api/chat");
    }
}
