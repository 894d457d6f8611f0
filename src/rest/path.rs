//! Path building infrastructure for REST resources.
//!
//! Each resource declares a table of [`ResourcePath`]s. An operation can have
//! more than one path: attribute values, for example, are listed either at
//! `attribute-value` (paginated) or under their parent attribute at
//! `attribute/{attribute_id}/values`. Path selection picks the most specific
//! path whose IDs are all available.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use catalog_admin::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "attribute-value"),
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::All,
//!         &["attribute_id"],
//!         "attribute/{attribute_id}/values",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::All, &["attribute_id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("attribute_id", "a-1");
//! assert_eq!(build_path(path.template, &ids), "attribute/a-1/values");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resource/{id}).
    Find,
    /// List a page of resources (GET /resource).
    All,
    /// Free-text search (GET /resource/find).
    Search,
    /// Create a new resource (POST /resource).
    Create,
    /// Update an existing resource (PUT /resource/{id}).
    Update,
    /// Delete a resource (DELETE /resource/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Search => "search",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders, e.g. `product/id/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters.
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose IDs are all available, the one
/// with the most IDs wins. Returns `None` if no path matches.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Values are percent-encoded so that an opaque identifier always stays a
/// single path segment. Placeholders missing from `ids` are left as-is.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let value = value.to_string();
        result = result.replace(&placeholder, &urlencoding::encode(&value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
