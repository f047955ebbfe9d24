//! Error types for the Vitesse API client.
//!
//! Every fallible operation in this crate returns [`ApiError`]. The variants
//! mirror the stages of the request pipeline: building the URL and headers,
//! encoding the body, the network exchange itself, the HTTP status check, and
//! finally decoding the response body. Credential storage failures are folded
//! in through [`CredentialError`] so repository calls surface a single error
//! type.

use thiserror::Error;

/// Unified error type for every operation in this crate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint path could not be combined with the base URL.
    #[error("Invalid URL for path {0:?}")]
    InvalidUrl(String),

    /// A header value contained bytes that cannot go on the wire.
    #[error("Invalid value for header {0:?}")]
    InvalidHeader(String),

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never reached the server: connection refused, DNS
    /// failure, timeout, or a dropped socket.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The exchange completed but did not produce a usable HTTP response.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    /// The server answered with a status code outside the 200-299 range.
    #[error("HTTP error {status}")]
    Http {
        /// Status code returned by the server.
        status: u16,
    },

    /// The server returned an empty body where data was expected.
    #[error("No data in response")]
    NoData,

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Credential storage failed or no token is stored.
    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl ApiError {
    /// Whether the error means no auth token is currently stored.
    ///
    /// Callers typically route to a login screen when this is true.
    pub fn is_credential_missing(&self) -> bool {
        matches!(self, Self::Credential(CredentialError::NotFound(_)))
    }

    /// Whether the request failed without ever reaching the server.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// The HTTP status code, when the server produced one.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors produced by a [`CredentialStore`](crate::credentials::CredentialStore).
#[derive(Debug, Error)]
pub enum CredentialError {
    /// An entry already exists under the given key.
    #[error("Credential already stored under {0:?}")]
    AlreadyExists(String),

    /// No entry exists under the given key.
    #[error("No credential stored under {0:?}")]
    NotFound(String),

    /// The backing store refused the operation.
    #[error("Credential store rejected the operation: {0}")]
    Rejected(String),
}
