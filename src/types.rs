//! Wire types and the domain model.
//!
//! DTO structs mirror the server's JSON verbatim, camelCase keys included;
//! the domain [`Candidate`] is what the rest of an application works with.
//! The only lossy step is the LinkedIn URL: the wire carries an arbitrary
//! string, the domain insists on a parsed [`Url`] and drops values that do
//! not parse.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Login response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Whether the account has admin rights.
    pub is_admin: bool,
}

/// Account creation request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Candidate record as the server sends and receives it.
///
/// Optional fields deserialize to `None` when absent and are omitted again
/// when serializing, so a record round-trips without inventing `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDto {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// LinkedIn profile URL as raw text. The server does not validate it.
    #[serde(rename = "linkedinURL", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    /// Free-form recruiter note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Favorite flag, toggled server-side.
    pub is_favorite: bool,
}

/// A candidate in the domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Identifier, generated client-side for new records.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Parsed LinkedIn profile URL.
    pub linkedin_url: Option<Url>,
    /// Free-form recruiter note.
    pub note: Option<String>,
    /// Favorite flag.
    pub is_favorite: bool,
}

impl Candidate {
    /// Creates a fresh candidate with a generated id and the favorite flag
    /// off.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            linkedin_url: None,
            note: None,
            is_favorite: false,
        }
    }

    /// Wire form of this candidate.
    pub fn to_dto(&self) -> CandidateDto {
        CandidateDto {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            linkedin_url: self.linkedin_url.as_ref().map(Url::to_string),
            note: self.note.clone(),
            is_favorite: self.is_favorite,
        }
    }
}

impl From<CandidateDto> for Candidate {
    /// Maps the wire form into the domain. A LinkedIn URL that does not
    /// parse is dropped rather than failing the whole candidate.
    fn from(dto: CandidateDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            linkedin_url: dto.linkedin_url.and_then(|raw| Url::parse(&raw).ok()),
            note: dto.note,
            is_favorite: dto.is_favorite,
        }
    }
}
