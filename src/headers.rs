//! HTTP header construction.
//!
//! [`HeaderBuilder`] produces the [`HeaderMap`] attached to every request.
//! The content-type and accept values are typed enums rather than free
//! strings so a typo cannot silently change what the server is told.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::ApiError;

/// Media types the client can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
    /// `text/plain`
    PlainText,
}

impl ContentType {
    /// Wire value of the `Content-Type` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::PlainText => "text/plain",
        }
    }
}

/// Media types the client can accept in responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accept {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
    /// `text/html`
    Html,
}

impl Accept {
    /// Wire value of the `Accept` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Html => "text/html",
        }
    }
}

/// Consuming builder for request header maps.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    headers: HeaderMap,
}

impl HeaderBuilder {
    /// Starts a header map announcing the given media types.
    pub fn new(content_type: ContentType, accept: Accept) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
        headers.insert(ACCEPT, HeaderValue::from_static(accept.as_str()));
        Self { headers }
    }

    /// JSON in, JSON out. The common case for this API.
    pub fn json() -> Self {
        Self::new(ContentType::Json, Accept::Json)
    }

    /// Attaches `Authorization: Bearer <token>`.
    ///
    /// The header value is marked sensitive so it never shows up in debug
    /// output of the header map.
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, ApiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.as_str().to_string()))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Sets an arbitrary header, replacing any previous value under the
    /// same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Finishes the builder and returns the header map.
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::json()
    }
}
