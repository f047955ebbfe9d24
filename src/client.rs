//! API client and the fetch abstraction.
//!
//! [`ApiFetch`] is the seam between repositories and the network: the real
//! [`ApiClient`] implements it by running the build/execute pipeline, and
//! tests implement it with scripted responses instead of subclassing
//! anything. The trait carries the raw byte fetch; typed decoding is a
//! provided method so every implementation gets it for free.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::decode;
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::ApiError;
use crate::request::ApiRequest;
use crate::transport::Transport;

/// The fetch surface repositories program against.
#[async_trait]
pub trait ApiFetch: Send + Sync {
    /// Sends a request and returns the raw response body.
    ///
    /// An empty body with a success status is `Ok(vec![])`.
    async fn fetch(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<Vec<u8>>,
        headers: Option<HeaderMap>,
    ) -> Result<Vec<u8>, ApiError>;

    /// Sends a request and decodes the JSON response body into `T`.
    ///
    /// An empty body fails with [`ApiError::NoData`] rather than reaching
    /// the decoder.
    async fn fetch_decoded<T>(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<Vec<u8>>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let bytes = self.fetch(endpoint, method, body, headers).await?;
        decode::json(&bytes)
    }
}

/// HTTP-backed client for the Vitesse API.
///
/// Cloning is cheap; clones share the transport's connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Transport,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            transport: Transport::new(),
        }
    }

    /// Creates a client over an existing HTTP client, keeping its pool and
    /// timeout settings.
    pub fn with_http_client(config: ApiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            transport: Transport::with_http_client(http_client),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Probes the server root, discarding any response body.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        self.fetch(Endpoint::CheckHealth, HttpMethod::Get, None, None)
            .await
            .map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait]
impl ApiFetch for ApiClient {
    async fn fetch(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<Vec<u8>>,
        headers: Option<HeaderMap>,
    ) -> Result<Vec<u8>, ApiError> {
        let request = ApiRequest::build(&self.config.base_url, &endpoint, method, body, headers)?;
        self.transport.execute(request).await
    }
}
