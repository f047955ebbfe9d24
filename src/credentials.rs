//! Credential storage.
//!
//! [`CredentialStore`] abstracts where the auth token lives: an OS keychain,
//! an encrypted file, or the bundled [`MemoryCredentialStore`]. The store is
//! synchronous and keyed by plain strings; secrets only gain their redacting
//! wrapper on the way out, in [`resolve_token`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use secrecy::SecretString;

use crate::error::CredentialError;

/// Key under which the auth token is persisted.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Keyed storage for secrets such as auth tokens.
///
/// Operations are deliberately strict: saving over an existing entry and
/// updating a missing one are both errors, so callers state their intent.
/// [`save_or_update`](CredentialStore::save_or_update) covers the common
/// "just persist it" case.
pub trait CredentialStore: Send + Sync {
    /// Stores a new entry. Fails with [`CredentialError::AlreadyExists`]
    /// when the key is taken.
    fn save(&self, key: &str, value: &str) -> Result<(), CredentialError>;

    /// Replaces an existing entry. Fails with [`CredentialError::NotFound`]
    /// when there is nothing to replace.
    fn update(&self, key: &str, value: &str) -> Result<(), CredentialError>;

    /// Returns the stored value. Fails with [`CredentialError::NotFound`]
    /// when the key is absent.
    fn retrieve(&self, key: &str) -> Result<String, CredentialError>;

    /// Removes an entry. Fails with [`CredentialError::NotFound`] when the
    /// key is absent.
    fn delete(&self, key: &str) -> Result<(), CredentialError>;

    /// Stores the value whether or not the key already exists.
    fn save_or_update(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        match self.retrieve(key) {
            Ok(_) => self.update(key, value),
            Err(CredentialError::NotFound(_)) => self.save(key, value),
            Err(other) => Err(other),
        }
    }
}

/// Reads the auth token out of the store as a redacting secret.
///
/// This is the gate every authenticated call passes through first; a
/// [`CredentialError::NotFound`] here means the user has to log in before
/// any network traffic makes sense.
pub fn resolve_token(store: &dyn CredentialStore) -> Result<SecretString, CredentialError> {
    store.retrieve(AUTH_TOKEN_KEY).map(SecretString::from)
}

/// In-memory [`CredentialStore`] for tests and short-lived sessions.
///
/// Entries do not survive the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, CredentialError> {
        self.entries
            .lock()
            .map_err(|_| CredentialError::Rejected("store mutex poisoned".into()))
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        let mut entries = self.lock()?;
        if entries.contains_key(key) {
            return Err(CredentialError::AlreadyExists(key.to_string()));
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn update(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        let mut entries = self.lock()?;
        match entries.get_mut(key) {
            Some(slot) => {
                *slot = value.to_string();
                Ok(())
            }
            None => Err(CredentialError::NotFound(key.to_string())),
        }
    }

    fn retrieve(&self, key: &str) -> Result<String, CredentialError> {
        let entries = self.lock()?;
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| CredentialError::NotFound(key.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), CredentialError> {
        let mut entries = self.lock()?;
        entries
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| CredentialError::NotFound(key.to_string()))
    }
}
