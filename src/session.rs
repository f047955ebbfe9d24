//! Authenticated session state.

use secrecy::SecretString;

/// An authenticated user session.
///
/// The token and the server-reported admin flag travel together instead of
/// being scattered across app state, and the token stays redacted in debug
/// output.
#[derive(Debug, Clone)]
pub struct Session {
    token: SecretString,
    is_admin: bool,
}

impl Session {
    /// Creates a session from a token and the admin flag.
    pub fn new(token: SecretString, is_admin: bool) -> Self {
        Self { token, is_admin }
    }

    /// The bearer token for this session.
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Whether the server granted admin rights.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
