//! # Catalog Admin
//!
//! A typed client and client-side state stores for a catalog administration
//! REST API: products, attributes, attribute groups, attribute values,
//! categories and collections.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`AdminConfig`] and [`AdminConfigBuilder`]
//! - Validated newtypes for the base URL and bearer token
//! - An async HTTP client over `reqwest` with bearer authentication
//! - One REST service per entity family through the [`rest::RestResource`] trait
//! - Replace-all relation sync for product relations
//! - Resource stores tracking loading state, the last listed page and the
//!   selected entity, with user-facing notifications for every outcome
//! - Login and user profile calls in [`auth`]
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_admin::{AdminConfig, ApiBaseUrl, AccessToken};
//!
//! let config = AdminConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://admin.example.com/api").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Using the Stores
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_admin::store::{CatalogStores, ChannelNotifier};
//! use catalog_admin::rest::PageParams;
//!
//! let (notifier, mut notifications) = ChannelNotifier::channel();
//! let stores = CatalogStores::new(&config, Arc::new(notifier))?;
//!
//! stores.attribute_groups.load(&PageParams::new(1, 10)).await?;
//! stores.products.load_by_id("p-1").await?;
//! stores.products.sync_related("p-1", &["p-2".to_string()]).await?;
//!
//! while let Ok(notification) = notifications.try_recv() {
//!     println!("{}", notification.title);
//! }
//! ```
//!
//! ## Using the Services Directly
//!
//! ```rust,ignore
//! use catalog_admin::RestClient;
//! use catalog_admin::rest::{RestResource, SearchParams};
//! use catalog_admin::rest::resources::Attribute;
//!
//! let client = RestClient::new(&config)?;
//! let found = Attribute::search(&client, &SearchParams::new("mat", 1, 10)).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: stores and clients are built explicitly and passed around
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Single attempt**: no retries, no implicit paging

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod store;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AdminConfig, AdminConfigBuilder, ApiBaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient, RestError,
};

// Re-export store types
pub use store::{
    CatalogStores, CurrentRefresh, Notification, NotificationVariant, Notifier, ProductStore,
    ResourceStore, StoreError, StoreState,
};
