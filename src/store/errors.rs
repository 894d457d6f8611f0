//! Errors returned by store operations.

use thiserror::Error;

use crate::rest::ResourceError;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying resource call failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// `update` was called with no current entity selected.
    #[error("No {resource} selected for update")]
    NoCurrentEntity {
        /// The resource name.
        resource: &'static str,
    },
}

impl StoreError {
    /// The human-readable message, if the error carries one.
    ///
    /// Server messages are passed through unchanged.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Resource(e) => e.user_message(),
            Self::NoCurrentEntity { .. } => Some(self.to_string()),
        }
    }

    /// Returns the HTTP status code, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Resource(e) => e.status(),
            Self::NoCurrentEntity { .. } => None,
        }
    }
}

// Verify StoreError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreError>();
};
