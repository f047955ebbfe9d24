//! HTTP transport.
//!
//! [`Transport`] owns the [`reqwest::Client`] and turns an assembled
//! [`ApiRequest`] into raw response bytes. Status handling is strict: only
//! the 200-299 range counts as success, everything else becomes
//! [`ApiError::Http`] with the offending status code.

use crate::error::ApiError;
use crate::request::ApiRequest;

/// Executes assembled requests over a shared HTTP client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    http_client: reqwest::Client,
}

impl Transport {
    /// Creates a transport with a default HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport over an existing HTTP client, keeping its
    /// connection pool, timeouts, and redirect policy.
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Sends the request and returns the raw response body.
    ///
    /// A success status with an empty body yields an empty vector; deciding
    /// whether that is acceptable is the caller's business. A non-success
    /// status discards the body and fails with the status code alone.
    pub async fn execute(&self, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
        let method = request.method();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .http_client
            .execute(request.into_reqwest())
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::Network)?;
        tracing::debug!(%method, %url, bytes = bytes.len(), "request succeeded");
        Ok(bytes.to_vec())
    }
}

/// Splits send failures into "never reached the server" and "the exchange
/// broke down".
fn classify_send_error(source: reqwest::Error) -> ApiError {
    if source.is_connect() || source.is_timeout() {
        ApiError::Network(source)
    } else {
        ApiError::InvalidResponse(source)
    }
}
