//! Endpoint catalog for the Vitesse API.
//!
//! [`Endpoint`] enumerates every route the client can reach and owns the
//! mapping from variant to relative path. URL assembly lives here too, so the
//! rest of the pipeline never does string surgery on paths.

use std::fmt;

use reqwest::Url;

/// Root path for user routes.
pub const USER_BASE: &str = "/user";

/// Root path for candidate routes.
pub const CANDIDATE_BASE: &str = "/candidate";

/// HTTP methods accepted by the Vitesse API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A route on the Vitesse API server.
///
/// Identifier-carrying variants take the candidate id already formatted as a
/// string; [`Uuid`](uuid::Uuid) values format to the expected lowercase
/// hyphenated form via `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Server liveness probe.
    CheckHealth,
    /// Exchange email and password for a token.
    Authenticate,
    /// Create a new user account.
    Register,
    /// Fetch all candidates.
    ListCandidates,
    /// Fetch a single candidate by id.
    GetCandidate(String),
    /// Create a candidate.
    CreateCandidate,
    /// Replace a candidate's fields.
    UpdateCandidate(String),
    /// Delete a candidate.
    DeleteCandidate(String),
    /// Flip a candidate's favorite flag.
    ToggleFavorite(String),
    /// Escape hatch for routes not in the catalog. The path must start
    /// with `/`.
    Custom(String),
}

impl Endpoint {
    /// Relative path of the endpoint, starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Self::CheckHealth => "/".to_string(),
            Self::Authenticate => format!("{USER_BASE}/auth"),
            Self::Register => format!("{USER_BASE}/register"),
            Self::ListCandidates | Self::CreateCandidate => CANDIDATE_BASE.to_string(),
            Self::GetCandidate(id) | Self::UpdateCandidate(id) | Self::DeleteCandidate(id) => {
                format!("{CANDIDATE_BASE}/{id}")
            }
            Self::ToggleFavorite(id) => format!("{CANDIDATE_BASE}/{id}/favorite"),
            Self::Custom(path) => path.clone(),
        }
    }

    /// Joins the endpoint path onto `base_url`.
    ///
    /// Returns `None` when the path is empty, contains whitespace, or the
    /// combined string does not parse as a URL. Whitespace is never
    /// percent-encoded on the caller's behalf.
    pub fn url(&self, base_url: &str) -> Option<Url> {
        let path = self.path();
        if path.is_empty() || path.contains(char::is_whitespace) {
            return None;
        }
        Url::parse(&format!("{base_url}{path}")).ok()
    }
}
