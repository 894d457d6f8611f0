//! Resource-specific error types for REST API operations.
//!
//! Resource services do not reinterpret transport failures: a non-2xx
//! response surfaces as [`ResourceError::Rest`] with the original
//! [`HttpError`](crate::clients::HttpError) inside. The other variants cover
//! what can go wrong on the client side of a call.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::rest::{RestResource, ResourceError};
//! use catalog_admin::rest::resources::Attribute;
//!
//! match Attribute::find(&client, "attr-1").await {
//!     Ok(attribute) => println!("Found: {}", attribute.name),
//!     Err(e) if e.status() == Some(404) => println!("gone"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for resource service operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The transport failed or the server answered with a non-2xx status.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode {resource} response: {source}")]
    Decode {
        /// The resource being decoded (e.g., "product").
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized.
    #[error("Failed to encode {resource} request: {source}")]
    Encode {
        /// The resource being encoded.
        resource: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// No path is declared for this operation on this resource.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource name.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "search").
        operation: &'static str,
    },
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        Self::Rest(RestError::Http(error))
    }
}

impl ResourceError {
    /// Returns the message to show a user for this error.
    ///
    /// For server responses this is the message the server sent, or `None`
    /// when the body carried none.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Rest(e) => e.user_message(),
            _ => Some(self.to_string()),
        }
    }

    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(RestError::Http(e)) => e.status(),
            _ => None,
        }
    }

    /// Returns the request ID of a failed response, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Rest(RestError::Http(HttpError::Response(e))) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
