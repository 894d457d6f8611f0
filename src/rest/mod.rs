//! REST resource layer for the catalog API.
//!
//! This module provides:
//!
//! - **[`RestResource`] trait**: list, search, find, create, update and delete
//!   with default implementations driven by a per-resource path table
//! - **Path building**: multiple paths per operation, most specific wins
//! - **[`PaginatedCollection`]**: one page of entities plus [`Pagination`]
//! - **[`Relation`]**: replace-all many-to-many relations
//! - **[`ResourceError`]**: errors of the resource layer
//!
//! Individual entity families live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::rest::{RestResource, PageParams, SearchParams};
//! use catalog_admin::rest::resources::Product;
//!
//! let page = Product::all(&client, &PageParams::new(1, 10)).await?;
//! for product in &page {
//!     println!("- {}", product.name);
//! }
//!
//! let found = Product::search(&client, &SearchParams::new("linen", 1, 10)).await?;
//! ```

mod errors;
mod pagination;
mod path;
mod relation;
pub(crate) mod resource;

pub mod resources;

pub use errors::ResourceError;
pub use pagination::{PageParams, PaginatedCollection, Pagination, SearchParams};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use relation::Relation;
pub use resource::RestResource;
