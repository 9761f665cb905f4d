//! Backend connection settings
//!
//! The base URL comes from `VITE_API_BASE_URL`. On the server it is read from the
//! process environment; in the WASM bundle there is no environment at runtime, so
//! the value captured at compile time is used instead.

/// Environment variable overriding the backend origin
pub const API_BASE_URL_ENV: &str = "VITE_API_BASE_URL";

/// Backend origin used when nothing overrides it
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Health endpoint path, relative to the base URL
pub const HEALTH_PATH: &str = "/api/health/";

/// Connection settings for [`crate::api_client::ModuClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for an explicit base URL. A trailing slash is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the environment, falling back to the local default.
    pub fn from_env() -> Self {
        Self::new(Self::resolve_base_url(runtime_override()))
    }

    fn resolve_base_url(runtime: Option<String>) -> String {
        let non_blank = |url: &String| !url.trim().is_empty();
        runtime
            .filter(non_blank)
            .or_else(|| option_env!("VITE_API_BASE_URL").map(str::to_string).filter(non_blank))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path on the backend
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_override() -> Option<String> {
    std::env::var(API_BASE_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_override() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url(), "http://api.example.com");
    }

    #[test]
    fn test_health_url() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.url(HEALTH_PATH), "http://localhost:8000/api/health/");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_runtime_override_wins() {
        let url = ApiConfig::resolve_base_url(Some("http://backend:9000".to_string()));
        assert_eq!(url, "http://backend:9000");
    }

    #[test]
    fn test_blank_override_falls_back() {
        let url = ApiConfig::resolve_base_url(Some("  ".to_string()));
        let expected = option_env!("VITE_API_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        assert_eq!(url, expected);
    }
}
