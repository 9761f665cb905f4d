//! CLI argument parsing for modu-dashboard

use std::path::PathBuf;

use clap::Parser;
use modu_dashboard::config::{ApiConfig, API_BASE_URL_ENV};

/// MODU Dashboard - server-rendered web UI for the MODU tool suite
#[derive(Parser, Debug)]
#[command(name = "modu-dashboard")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Port to bind the web server
    #[arg(long, short, default_value = "3000", env = "PORT")]
    pub port: u16,

    /// Directory holding the compiled site (WASM pkg, assets)
    #[arg(long, value_name = "PATH", env = "LEPTOS_SITE_ROOT")]
    pub site_root: Option<PathBuf>,

    /// Backend origin the dashboard talks to
    #[arg(long = "api-url", value_name = "URL", env = API_BASE_URL_ENV)]
    pub api_url: Option<String>,
}

impl Args {
    /// Site root: `target/site` in debug builds, `/app/target/site` in release
    pub fn site_root(&self) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| {
            if cfg!(debug_assertions) {
                PathBuf::from("target/site")
            } else {
                PathBuf::from("/app/target/site")
            }
        })
    }

    /// Backend settings: `--api-url` if given, otherwise the built-in default
    pub fn api_config(&self) -> ApiConfig {
        self.api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(ApiConfig::new)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_port() {
        let args = Args::parse_from(["modu-dashboard", "--port", "8080"]);
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn test_explicit_site_root() {
        let args = Args::parse_from(["modu-dashboard", "--site-root", "/srv/site"]);
        assert_eq!(args.site_root(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_api_url() {
        let args = Args::parse_from(["modu-dashboard", "--api-url", "http://backend:8000/"]);
        assert_eq!(args.api_url.as_deref(), Some("http://backend:8000/"));
        assert_eq!(args.api_config().base_url(), "http://backend:8000");
    }

    #[test]
    fn test_blank_api_url_uses_default() {
        let args = Args::parse_from(["modu-dashboard", "--api-url", " "]);
        assert_eq!(args.api_config().base_url(), "http://localhost:8000");
    }
}
