//! Authentication against the catalog API.
//!
//! - [`login`] exchanges [`Credentials`] for a bearer [`AccessToken`]
//! - [`user_info`] fetches the profile of the authenticated user
//!
//! Storing the token is up to the caller; derive an authenticated
//! configuration with [`AdminConfig::with_access_token`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::auth::{login, user_info, Credentials};
//! use catalog_admin::{AdminConfig, RestClient};
//!
//! let anonymous = RestClient::new(&config)?;
//! let token = login(&anonymous, &Credentials::new("admin@example.com", "secret")).await?;
//!
//! let config = config.with_access_token(token);
//! let client = RestClient::new(&config)?;
//! let me = user_info(&client).await?;
//! ```
//!
//! [`AccessToken`]: crate::AccessToken
//! [`AdminConfig::with_access_token`]: crate::AdminConfig::with_access_token

mod errors;
mod session;

pub use errors::AuthError;
pub use session::{login, user_info, Credentials, UserInfo};
