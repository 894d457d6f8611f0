//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type for accessing API
//! response data.

use std::collections::HashMap;

use crate::clients::errors::HttpResponseError;

/// An HTTP response from the catalog API.
///
/// Header names are stored lowercase; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Empty bodies parse to `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Builds the error describing this (non-2xx) response.
    #[must_use]
    pub fn to_error(&self) -> HttpResponseError {
        HttpResponseError {
            code: self.code,
            message: HttpResponseError::message_from_body(&self.body),
            error_reference: self.request_id().map(String::from),
        }
    }
}
