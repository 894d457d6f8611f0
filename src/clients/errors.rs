//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {:?}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// `message` holds the human-readable text the server put in the body's
/// `message` or `error` field, when there is one.
///
/// # Example
///
/// ```rust
/// use catalog_admin::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: Some("not found".to_string()),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 404: not found");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {}", message.as_deref().unwrap_or("request failed"))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Message extracted from the response body, if any.
    pub message: Option<String>,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Extracts a human-readable message from an error response body.
    ///
    /// Looks at `message`, then `error`, then a string array under `errors`.
    #[must_use]
    pub fn message_from_body(body: &serde_json::Value) -> Option<String> {
        let text = |key: &str| {
            body.get(key)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        text("message").or_else(|| text("error")).or_else(|| {
            let joined = body
                .get("errors")?
                .as_array()?
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            (!joined.is_empty()).then_some(joined)
        })
    }
}

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use catalog_admin::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the message to show a user for this error.
    ///
    /// For responses this is the server's message, if it sent one.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Response(e) => e.message.clone(),
            Self::InvalidRequest(e) => Some(e.to_string()),
            Self::Network(e) => Some(e.to_string()),
        }
    }

    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_display_uses_message() {
        let error = HttpResponseError {
            code: 404,
            message: Some("not found".to_string()),
            error_reference: None,
        };
        assert_eq!(error.to_string(), "HTTP 404: not found");
    }

    #[test]
    fn test_http_response_error_display_without_message() {
        let error = HttpResponseError {
            code: 502,
            message: None,
            error_reference: Some("req-1".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP 502: request failed");
    }

    #[test]
    fn test_message_from_body_prefers_message_field() {
        let body = json!({"message": "slug already taken", "error": "conflict"});
        assert_eq!(
            HttpResponseError::message_from_body(&body),
            Some("slug already taken".to_string())
        );
    }

    #[test]
    fn test_message_from_body_falls_back_to_error_then_errors() {
        assert_eq!(
            HttpResponseError::message_from_body(&json!({"error": "forbidden"})),
            Some("forbidden".to_string())
        );
        assert_eq!(
            HttpResponseError::message_from_body(&json!({"errors": ["name is required", "slug is required"]})),
            Some("name is required; slug is required".to_string())
        );
    }

    #[test]
    fn test_message_from_body_none_for_unrelated_body() {
        assert_eq!(HttpResponseError::message_from_body(&json!({})), None);
        assert_eq!(HttpResponseError::message_from_body(&json!({"message": ""})), None);
        assert_eq!(HttpResponseError::message_from_body(&json!({"errors": []})), None);
    }

    #[test]
    fn test_user_message_for_response_error() {
        let error = HttpError::Response(HttpResponseError {
            code: 400,
            message: Some("bad payload".to_string()),
            error_reference: None,
        });
        assert_eq!(error.user_message(), Some("bad payload".to_string()));
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_user_message_for_invalid_request() {
        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        });
        assert_eq!(
            error.user_message(),
            Some("Cannot use put without specifying data.".to_string())
        );
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: None,
            error_reference: None,
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid_error;
    }
}
