//! Client configuration.

/// Default base URL of a locally hosted Vitesse API server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Configuration for an [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host, and port of the API server, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Creates a configuration pointing at the given server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
