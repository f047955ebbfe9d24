//! Typed async client for the Vitesse candidate-tracking API.
//!
//! The crate is a small pipeline. The [`Endpoint`] catalog knows every
//! route, [`HeaderBuilder`](headers::HeaderBuilder) produces the header map,
//! [`ApiRequest`](request::ApiRequest) assembles and validates the request,
//! and [`ApiClient`] executes it and decodes the JSON reply. On top of that
//! sit two repositories that speak the domain language: sessions and
//! candidates in and out, with the auth token kept in a
//! [`CredentialStore`](credentials::CredentialStore).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use vitesse_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let client = ApiClient::new(ApiConfig::default());
//!     let store = Arc::new(MemoryCredentialStore::new());
//!
//!     let auth = AuthRepository::new(client.clone(), store.clone());
//!     let session = auth.login("admin@vitesse.com", "test123").await?;
//!     println!("admin: {}", session.is_admin());
//!
//!     let candidates = CandidateRepository::new(client, store);
//!     for candidate in candidates.list().await? {
//!         println!("{} {}", candidate.first_name, candidate.last_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Every operation returns [`ApiError`]. Status and credential problems are
//! plain variants, so callers can route on them:
//!
//! ```rust,no_run
//! use vitesse_client::prelude::*;
//!
//! # async fn demo(candidates: CandidateRepository) {
//! match candidates.list().await {
//!     Ok(list) => println!("{} candidates", list.len()),
//!     Err(error) if error.is_credential_missing() => println!("log in first"),
//!     Err(ApiError::Http { status: 401 }) => println!("session expired"),
//!     Err(error) => eprintln!("{error}"),
//! }
//! # }
//! ```

#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod credentials;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod headers;
pub mod repositories;
pub mod request;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{ApiClient, ApiFetch};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use credentials::{AUTH_TOKEN_KEY, CredentialStore, MemoryCredentialStore};
pub use endpoint::{Endpoint, HttpMethod};
pub use error::{ApiError, CredentialError};
pub use repositories::{AuthRepository, BatchDeleteOutcome, CandidateRepository};
pub use session::Session;
pub use types::{AuthRequest, AuthResponse, Candidate, CandidateDto, RegisterRequest};

/// One-line import for application code.
pub mod prelude {
    pub use crate::client::{ApiClient, ApiFetch};
    pub use crate::config::{ApiConfig, DEFAULT_BASE_URL};
    pub use crate::credentials::{
        AUTH_TOKEN_KEY, CredentialStore, MemoryCredentialStore, resolve_token,
    };
    pub use crate::endpoint::{Endpoint, HttpMethod};
    pub use crate::error::{ApiError, CredentialError};
    pub use crate::headers::{Accept, ContentType, HeaderBuilder};
    pub use crate::repositories::{AuthRepository, BatchDeleteOutcome, CandidateRepository};
    pub use crate::session::Session;
    pub use crate::types::{AuthRequest, AuthResponse, Candidate, CandidateDto, RegisterRequest};

    pub use secrecy::{ExposeSecret, SecretString};
    pub use uuid::Uuid;
}
