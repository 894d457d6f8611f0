//! HTTP client types for catalog API communication.
//!
//! This module provides the transport layer: authenticated requests,
//! response parsing, and mapping of non-2xx responses to errors.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level client with `get`/`post`/`put`/`delete`
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::{AdminConfig, ApiBaseUrl};
//! use catalog_admin::clients::{HttpClient, HttpRequest, HttpMethod};
//! use catalog_admin::rest::PageParams;
//! use std::collections::HashMap;
//!
//! let config = AdminConfig::builder()
//!     .api_base_url(ApiBaseUrl::new("https://api.example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let page = PageParams::new(1, 10);
//! let request = HttpRequest::builder(HttpMethod::Get, "product")
//!     .query(HashMap::from([
//!         ("page".to_string(), page.page.to_string()),
//!         ("page_size".to_string(), page.page_size.to_string()),
//!     ]))
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! Requests are single-shot: a failure is returned to the caller as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{RestClient, RestError};
