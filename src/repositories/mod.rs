//! High-level flows over the API client.
//!
//! Repositories pair an [`ApiFetch`](crate::client::ApiFetch) implementation
//! with a [`CredentialStore`](crate::credentials::CredentialStore) and speak
//! the domain language: sessions and candidates in, sessions and candidates
//! out. They are generic over the fetch implementation so tests can swap in
//! a scripted double.

mod auth;
mod candidate;

pub use auth::AuthRepository;
pub use candidate::{BatchDeleteOutcome, CandidateRepository};
