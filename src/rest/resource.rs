//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for the catalog API's entity families. Resources that implement
//! this trait gain `all()`, `search()`, `find()`, `create()`, `update()` and
//! `delete()`.
//!
//! Each operation translates into exactly one transport call and returns the
//! decoded body. Nothing is cached and nothing is retried.
//!
//! # Implementing a Resource
//!
//! 1. Define the entity struct and its request payloads with serde derives
//! 2. Implement `RestResource` with the names, path table and search key
//! 3. The trait provides default implementations for every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::rest::{RestResource, ResourcePath, ResourceOperation, PageParams};
//! use catalog_admin::HttpMethod;
//!
//! impl RestResource for Category {
//!     type ListParams = PageParams;
//!     type CreateRequest = CreateCategoryRequest;
//!     type UpdateRequest = UpdateCategoryRequest;
//!
//!     const NAME: &'static str = "category";
//!     const PLURAL: &'static str = "categories";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "category"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "category/{id}"),
//!         // ...
//!     ];
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//! }
//!
//! let page = Category::all(&client, &PageParams::new(1, 10)).await?;
//! let category = Category::find(&client, "c-1").await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::pagination::PageBody;
use crate::rest::{
    build_path, get_path, PaginatedCollection, ResourceError, ResourceOperation, ResourcePath,
    SearchParams,
};

/// A catalog entity family that can be listed, searched, fetched, created,
/// updated, and deleted.
///
/// # Associated Types
///
/// - `ListParams`: Query parameters for `all()` (page selection plus filters)
/// - `CreateRequest`: Payload for `create()`; carries no id
/// - `UpdateRequest`: Payload for `update()`
///
/// # Associated Constants
///
/// - `NAME`: Singular human-readable name (e.g., "attribute group")
/// - `PLURAL`: Plural human-readable name (e.g., "attribute groups")
/// - `PATHS`: Available paths for the different operations
/// - `SEARCH_KEY`: Query key carrying the text of a search
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Parameters for `all()` operations.
    type ListParams: Serialize + Default + Send + Sync;

    /// Payload for `create()`.
    type CreateRequest: Serialize + Send + Sync;

    /// Payload for `update()`.
    type UpdateRequest: Serialize + Send + Sync;

    /// The singular name of the resource, used in messages.
    const NAME: &'static str;

    /// The plural name of the resource, used in messages.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// The query key that carries the text of a search.
    const SEARCH_KEY: &'static str = "query";

    /// Returns the server-assigned identifier.
    fn id(&self) -> &str;

    /// Lists one page of resources.
    ///
    /// `page` and `page_size` are sent exactly as provided.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body is not a page of this resource.
    async fn all(
        client: &RestClient,
        params: &Self::ListParams,
    ) -> Result<PaginatedCollection<Self>, ResourceError> {
        let query = serialize_to_query::<Self, _>(params)?;
        let body = dispatch::<Self>(client, ResourceOperation::All, &[], None, Some(query)).await?;
        decode::<Self, PaginatedCollection<Self>>(body)
    }

    /// Searches resources by free text.
    ///
    /// The text is sent under [`Self::SEARCH_KEY`]. A bare array response is
    /// returned as a single page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body cannot be read.
    async fn search(
        client: &RestClient,
        params: &SearchParams,
    ) -> Result<PaginatedCollection<Self>, ResourceError> {
        let query = params.to_query(Self::SEARCH_KEY);
        let body =
            dispatch::<Self>(client, ResourceOperation::Search, &[], None, Some(query)).await?;
        decode::<Self, PageBody<Self>>(body).map(Into::into)
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails (including 404)
    /// and [`ResourceError::Decode`] if the body cannot be read.
    async fn find(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        let body = dispatch::<Self>(client, ResourceOperation::Find, &[("id", id)], None, None)
            .await?;
        decode::<Self, Self>(body)
    }

    /// Creates a resource. The server assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if the request cannot be serialized,
    /// [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body cannot be read.
    async fn create(
        client: &RestClient,
        request: &Self::CreateRequest,
    ) -> Result<Self, ResourceError> {
        let payload = encode::<Self, _>(request)?;
        let body =
            dispatch::<Self>(client, ResourceOperation::Create, &[], Some(payload), None).await?;
        decode::<Self, Self>(body)
    }

    /// Updates the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Encode`] if the request cannot be serialized,
    /// [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body cannot be read.
    async fn update(
        client: &RestClient,
        id: &str,
        request: &Self::UpdateRequest,
    ) -> Result<Self, ResourceError> {
        let payload = encode::<Self, _>(request)?;
        let body = dispatch::<Self>(
            client,
            ResourceOperation::Update,
            &[("id", id)],
            Some(payload),
            None,
        )
        .await?;
        decode::<Self, Self>(body)
    }

    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    async fn delete(client: &RestClient, id: &str) -> Result<(), ResourceError> {
        dispatch::<Self>(client, ResourceOperation::Delete, &[("id", id)], None, None).await?;
        Ok(())
    }
}

/// Resolves the path for `operation` and sends one request.
///
/// Returns the parsed response body. Empty id values fail with
/// [`ResourceError::PathResolutionFailed`] before anything is sent.
pub(crate) async fn dispatch<R: RestResource>(
    client: &RestClient,
    operation: ResourceOperation,
    ids: &[(&str, &str)],
    body: Option<Value>,
    query: Option<HashMap<String, String>>,
) -> Result<Value, ResourceError> {
    let unresolved = ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    };

    // An empty id would collapse `{resource}/{id}` onto the collection path.
    if ids.iter().any(|(_, value)| value.is_empty()) {
        return Err(unresolved);
    }

    let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(R::PATHS, operation, &available_ids).ok_or(unresolved)?;

    let ids: HashMap<&str, &str> = ids.iter().copied().collect();
    let url = build_path(path.template, &ids);

    let response = client.send(path.http_method, &url, body, query).await?;
    Ok(response.body)
}

pub(crate) fn decode<R: RestResource, T: DeserializeOwned>(body: Value) -> Result<T, ResourceError> {
    serde_json::from_value(body).map_err(|source| ResourceError::Decode {
        resource: R::NAME,
        source,
    })
}

fn encode<R: RestResource, T: Serialize>(request: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(request).map_err(|source| ResourceError::Encode {
        resource: R::NAME,
        source,
    })
}

/// Flattens a params struct into query pairs. `None` fields are skipped.
fn serialize_to_query<R: RestResource, T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = encode::<R, T>(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
