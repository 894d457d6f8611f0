//! Authentication error types.

use crate::clients::RestError;
use thiserror::Error;

/// Errors that can occur while logging in or fetching the user profile.
///
/// # Example
///
/// ```rust
/// use catalog_admin::auth::AuthError;
///
/// let error = AuthError::MissingToken;
/// assert_eq!(error.to_string(), "Login response did not contain a token");
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request failed or was rejected.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The response body had an unexpected shape.
    #[error("Failed to decode {what}: {source}")]
    Decode {
        /// What was being decoded.
        what: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The login succeeded but carried no usable token.
    #[error("Login response did not contain a token")]
    MissingToken,
}

impl AuthError {
    /// Returns the message to show a user for this error.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Rest(e) => e.user_message(),
            _ => Some(self.to_string()),
        }
    }
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
