//! Candidate CRUD and the batch-delete fan-out.

use std::sync::Arc;

use futures::future::join_all;
use reqwest::header::HeaderMap;
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::client::{ApiClient, ApiFetch};
use crate::credentials::{CredentialStore, resolve_token};
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::ApiError;
use crate::headers::HeaderBuilder;
use crate::types::{Candidate, CandidateDto};

/// What a batch delete left behind.
#[derive(Debug, Default)]
pub struct BatchDeleteOutcome {
    /// Ids removed on the server.
    pub succeeded: Vec<Uuid>,
    /// Ids still present, with the error that kept each one.
    pub failed: Vec<(Uuid, ApiError)>,
}

impl BatchDeleteOutcome {
    /// Number of deletions that failed.
    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Whether every requested deletion went through.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Candidate CRUD over the authenticated routes.
///
/// Every call resolves the stored token first; a missing token fails with
/// [`ApiError::Credential`] before any network traffic happens.
#[derive(Clone)]
pub struct CandidateRepository<C = ApiClient> {
    client: C,
    credentials: Arc<dyn CredentialStore>,
}

impl<C: ApiFetch> CandidateRepository<C> {
    /// Creates a repository over a client and a credential store.
    pub fn new(client: C, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { client, credentials }
    }

    /// JSON headers with the stored bearer token attached.
    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = resolve_token(self.credentials.as_ref())?;
        Ok(HeaderBuilder::json()
            .with_bearer_auth(token.expose_secret())?
            .build())
    }

    /// Fetches every candidate.
    pub async fn list(&self) -> Result<Vec<Candidate>, ApiError> {
        let headers = self.auth_headers()?;
        let dtos: Vec<CandidateDto> = self
            .client
            .fetch_decoded(
                Endpoint::ListCandidates,
                HttpMethod::Get,
                None,
                Some(headers),
            )
            .await?;
        Ok(dtos.into_iter().map(Candidate::from).collect())
    }

    /// Fetches one candidate by id.
    pub async fn get(&self, id: Uuid) -> Result<Candidate, ApiError> {
        let headers = self.auth_headers()?;
        let dto: CandidateDto = self
            .client
            .fetch_decoded(
                Endpoint::GetCandidate(id.to_string()),
                HttpMethod::Get,
                None,
                Some(headers),
            )
            .await?;
        Ok(dto.into())
    }

    /// Creates a candidate and returns the server's record of it.
    pub async fn create(&self, candidate: &Candidate) -> Result<Candidate, ApiError> {
        let headers = self.auth_headers()?;
        let body = serde_json::to_vec(&candidate.to_dto()).map_err(ApiError::Encode)?;
        let dto: CandidateDto = self
            .client
            .fetch_decoded(
                Endpoint::CreateCandidate,
                HttpMethod::Post,
                Some(body),
                Some(headers),
            )
            .await?;
        Ok(dto.into())
    }

    /// Replaces a candidate's fields and returns the updated record.
    pub async fn update(&self, candidate: &Candidate) -> Result<Candidate, ApiError> {
        let headers = self.auth_headers()?;
        let body = serde_json::to_vec(&candidate.to_dto()).map_err(ApiError::Encode)?;
        let dto: CandidateDto = self
            .client
            .fetch_decoded(
                Endpoint::UpdateCandidate(candidate.id.to_string()),
                HttpMethod::Put,
                Some(body),
                Some(headers),
            )
            .await?;
        Ok(dto.into())
    }

    /// Deletes a candidate. The server answers with an empty body.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        self.client
            .fetch(
                Endpoint::DeleteCandidate(id.to_string()),
                HttpMethod::Delete,
                None,
                Some(headers),
            )
            .await
            .map(|_| ())
    }

    /// Flips the favorite flag and returns the updated record.
    pub async fn toggle_favorite(&self, id: Uuid) -> Result<Candidate, ApiError> {
        let headers = self.auth_headers()?;
        let dto: CandidateDto = self
            .client
            .fetch_decoded(
                Endpoint::ToggleFavorite(id.to_string()),
                HttpMethod::Post,
                None,
                Some(headers),
            )
            .await?;
        Ok(dto.into())
    }

    /// Deletes many candidates concurrently.
    ///
    /// Every id is attempted even when others fail; one slow or broken
    /// deletion never aborts the rest. The outcome lists both sides in the
    /// order the ids were given.
    pub async fn delete_many(&self, ids: &[Uuid]) -> BatchDeleteOutcome {
        let attempts = join_all(
            ids.iter()
                .copied()
                .map(|id| async move { (id, self.delete(id).await) }),
        )
        .await;

        let mut outcome = BatchDeleteOutcome::default();
        for (id, result) in attempts {
            match result {
                Ok(()) => outcome.succeeded.push(id),
                Err(error) => {
                    tracing::warn!(%id, %error, "batch delete left a candidate behind");
                    outcome.failed.push((id, error));
                }
            }
        }
        outcome
    }
}
