//! Request assembly.
//!
//! [`ApiRequest`] is the immutable product of the builder step: a parsed
//! URL, a method, the headers to send verbatim, and an optional raw body.
//! Everything downstream of [`ApiRequest::build`] works with values that
//! already passed URL validation.

use reqwest::header::HeaderMap;
use reqwest::{Body, Url};

use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::ApiError;

/// A fully assembled API request, ready for the transport.
#[derive(Debug)]
pub struct ApiRequest {
    url: Url,
    method: HttpMethod,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Assembles a request from its parts.
    ///
    /// Fails with [`ApiError::InvalidUrl`] when the endpoint path cannot be
    /// combined with `base_url`. When `headers` is `None` the request goes
    /// out with no headers beyond what the HTTP stack itself adds.
    pub fn build(
        base_url: &str,
        endpoint: &Endpoint,
        method: HttpMethod,
        body: Option<Vec<u8>>,
        headers: Option<HeaderMap>,
    ) -> Result<Self, ApiError> {
        let url = endpoint
            .url(base_url)
            .ok_or_else(|| ApiError::InvalidUrl(endpoint.path()))?;
        Ok(Self {
            url,
            method,
            headers: headers.unwrap_or_default(),
            body,
        })
    }

    /// Target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Headers attached to the outgoing request, exactly as given.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes, if any.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Converts into the wire request handed to the HTTP client.
    pub(crate) fn into_reqwest(self) -> reqwest::Request {
        let mut request = reqwest::Request::new(self.method.into(), self.url);
        *request.headers_mut() = self.headers;
        *request.body_mut() = self.body.map(Body::from);
        request
    }
}
