//! Typed response decoding.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decodes a JSON response body into `T`.
///
/// An empty body fails with [`ApiError::NoData`] before any parsing is
/// attempted; malformed or mismatched JSON fails with [`ApiError::Decode`].
pub fn json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::NoData);
    }
    serde_json::from_slice(bytes).map_err(ApiError::Decode)
}
