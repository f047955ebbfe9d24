//! Authentication flows.

use std::sync::Arc;

use secrecy::SecretString;

use crate::client::{ApiClient, ApiFetch};
use crate::credentials::{AUTH_TOKEN_KEY, CredentialStore};
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::ApiError;
use crate::headers::HeaderBuilder;
use crate::session::Session;
use crate::types::{AuthRequest, AuthResponse, RegisterRequest};

/// Login and registration against the user routes.
///
/// Neither flow sends an `Authorization` header; these are the calls that
/// produce the token in the first place.
#[derive(Clone)]
pub struct AuthRepository<C = ApiClient> {
    client: C,
    credentials: Arc<dyn CredentialStore>,
}

impl<C: ApiFetch> AuthRepository<C> {
    /// Creates a repository over a client and a credential store.
    pub fn new(client: C, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { client, credentials }
    }

    /// Exchanges email and password for a token without persisting it.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_vec(&AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::Encode)?;
        self.client
            .fetch_decoded(
                Endpoint::Authenticate,
                HttpMethod::Post,
                Some(body),
                Some(HeaderBuilder::json().build()),
            )
            .await
    }

    /// Authenticates, persists the token, and returns the session.
    ///
    /// The token lands in the credential store under [`AUTH_TOKEN_KEY`]; a
    /// repeated login replaces the stored value.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let auth = self.authenticate(email, password).await?;
        self.credentials.save_or_update(AUTH_TOKEN_KEY, &auth.token)?;
        tracing::debug!(is_admin = auth.is_admin, "login succeeded, token stored");
        Ok(Session::new(SecretString::from(auth.token), auth.is_admin))
    }

    /// Creates a new account. The server answers with an empty body, so
    /// success carries no data.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_vec(request).map_err(ApiError::Encode)?;
        self.client
            .fetch(
                Endpoint::Register,
                HttpMethod::Post,
                Some(body),
                Some(HeaderBuilder::json().build()),
            )
            .await
            .map(|_| ())
    }
}
