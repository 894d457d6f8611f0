//! Configuration types for the catalog admin client.
//!
//! # Overview
//!
//! - [`AdminConfig`]: The configuration shared by the transport and the stores
//! - [`AdminConfigBuilder`]: A builder for constructing [`AdminConfig`] instances
//! - [`ApiBaseUrl`]: A validated API base URL
//! - [`AccessToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::{AdminConfig, ApiBaseUrl, AccessToken, CurrentRefresh};
//!
//! let config = AdminConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .update_refresh(CurrentRefresh::Refresh)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.update_refresh(), CurrentRefresh::Refresh);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiBaseUrl};

use crate::error::ConfigError;
use crate::store::CurrentRefresh;

/// Configuration for the catalog admin client.
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`. Stores and clients take
/// it by reference at construction and keep what they need.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    api_base_url: ApiBaseUrl,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    update_refresh: CurrentRefresh,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &ApiBaseUrl {
        &self.api_base_url
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns what stores do with `current` after a successful update.
    #[must_use]
    pub const fn update_refresh(&self) -> CurrentRefresh {
        self.update_refresh
    }

    /// Returns a copy of this configuration carrying `token`.
    ///
    /// Used after [`login`](crate::auth::login) to build an authenticated client.
    #[must_use]
    pub fn with_access_token(&self, token: AccessToken) -> Self {
        Self {
            access_token: Some(token),
            ..self.clone()
        }
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// `api_base_url` is required.
///
/// # Defaults
///
/// - `access_token`: `None` (anonymous requests, e.g. for login)
/// - `user_agent_prefix`: `None`
/// - `update_refresh`: [`CurrentRefresh::Keep`]
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    api_base_url: Option<ApiBaseUrl>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    update_refresh: Option<CurrentRefresh>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default update policy for stores built from this config.
    #[must_use]
    pub const fn update_refresh(mut self, policy: CurrentRefresh) -> Self {
        self.update_refresh = Some(policy);
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_base_url` is not set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let api_base_url = self.api_base_url.ok_or(ConfigError::MissingRequiredField {
            field: "api_base_url",
        })?;

        Ok(AdminConfig {
            api_base_url,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
            update_refresh: self.update_refresh.unwrap_or_default(),
        })
    }
}
