//! REST client for the catalog API.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with
//! `get()`, `post()`, `put()` and `delete()` helpers and path normalization.
//! It is the transport every resource service and store goes through.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::{AdminConfig, ApiBaseUrl, RestClient};
//!
//! let config = AdminConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//! let response = client.get("attribute-group", None).await?;
//! println!("Groups: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! Leading slashes are stripped: `/product` -> `product`. Empty paths are
//! rejected with [`RestError::InvalidPath`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
