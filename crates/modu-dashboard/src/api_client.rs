//! HTTP client for calling the MODU backend
//!
//! Thin wrapper over reqwest with a fixed JSON content type and an optional
//! Bearer token taken from an injected [`CredentialProvider`]. Works both natively
//! and in the browser, where reqwest goes through `fetch`.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ApiConfig, HEALTH_PATH};
use crate::credentials::{CredentialProvider, NoCredentials};

/// Errors that can occur when calling the MODU backend
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to deserialize response
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type for API client operations
pub type Result<T> = std::result::Result<T, ApiClientError>;

/// HTTP client for the MODU backend
#[derive(Clone)]
pub struct ModuClient {
    client: Client,
    config: ApiConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for ModuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl ModuClient {
    /// Create a client for the given backend.
    ///
    /// The credential provider is consulted on every request; see
    /// [`crate::credentials`] for the available providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::sync::Arc;
    /// use modu_dashboard::api_client::ModuClient;
    /// use modu_dashboard::config::ApiConfig;
    /// use modu_dashboard::credentials::StaticToken;
    ///
    /// let client = ModuClient::new(
    ///     ApiConfig::new("http://localhost:8000"),
    ///     Arc::new(StaticToken::new("my-token")),
    /// )
    /// .unwrap();
    /// ```
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Create a client that never sends an `Authorization` header
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn anonymous(config: ApiConfig) -> Result<Self> {
        Self::new(config, Arc::new(NoCredentials))
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Build a request, attaching the bearer token if the provider has one
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.config.url(path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.credentials.token() {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        tracing::debug!(url = %url, "sending backend request");
        req
    }

    /// Handle API response, converting errors appropriately
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiClientError::Deserialize(e.to_string()));
        }

        let error_text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ApiClientError::NotFound(error_text)),
            StatusCode::UNAUTHORIZED => Err(ApiClientError::Unauthorized(error_text)),
            _ => Err(ApiClientError::Api {
                status: status.as_u16(),
                message: error_text,
            }),
        }
    }

    /// Check backend health
    ///
    /// Calls GET /api/health/ and returns the decoded body as-is; no schema is
    /// imposed on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a non-2xx
    /// status, or the body is not JSON.
    pub async fn get_health(&self) -> Result<Value> {
        let response = self
            .request(reqwest::Method::GET, HEALTH_PATH)
            .send()
            .await?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticToken;

    #[test]
    fn test_client_new() {
        let client = ModuClient::anonymous(ApiConfig::new("http://localhost:9090")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ModuClient::new(
            ApiConfig::new("http://localhost:9090/"),
            Arc::new(StaticToken::new("test-token")),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:9090");
    }

    #[test]
    fn test_request_carries_bearer_token() {
        let client = ModuClient::new(
            ApiConfig::new("http://localhost:9090"),
            Arc::new(StaticToken::new("test-token")),
        )
        .unwrap();
        let request = client
            .request(reqwest::Method::GET, HEALTH_PATH)
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:9090/api/health/");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer test-token"
        );
    }

    #[test]
    fn test_request_without_token_has_no_auth_header() {
        let client = ModuClient::anonymous(ApiConfig::new("http://localhost:9090")).unwrap();
        let request = client
            .request(reqwest::Method::GET, HEALTH_PATH)
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = ModuClient::new(
            ApiConfig::new("http://localhost:9090"),
            Arc::new(StaticToken::new("secret")),
        )
        .unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("localhost:9090"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_error_display() {
        let err = ApiClientError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): down");
    }
}
