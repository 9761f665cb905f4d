//! Credential providers for outgoing API requests
//!
//! The client asks its provider for a token on every request instead of reading
//! browser storage itself, so tests can hand it a fixed token (or none).

use std::fmt;
use std::sync::Arc;

/// Key under which the browser keeps the auth token
pub const TOKEN_STORAGE_KEY: &str = "modu_auth_token";

/// Source of the bearer token attached to outgoing requests.
///
/// Returning `None` is not an error: the request simply goes out without an
/// `Authorization` header.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Never supplies a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Always supplies the same token
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticToken").field(&"<redacted>").finish()
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

/// Reads the token from the browser's `localStorage` at request time.
///
/// Outside a browser (or when storage is blocked) it yields no token.
#[derive(Debug, Clone)]
pub struct LocalStorageToken {
    key: String,
}

impl LocalStorageToken {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageToken {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl CredentialProvider for LocalStorageToken {
    #[cfg(feature = "hydrate")]
    fn token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    #[cfg(not(feature = "hydrate"))]
    fn token(&self) -> Option<String> {
        None
    }
}

/// Provider used by the UI: browser storage when hydrated, nothing on the server.
pub fn default_provider() -> Arc<dyn CredentialProvider> {
    Arc::new(LocalStorageToken::default())
}
