//! Replace-all many-to-many relations.
//!
//! A relation is fetched from one path and synced through another. Syncing
//! sends the complete desired id set and the server applies the difference,
//! so an empty set clears the relation.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::{build_path, ResourceError};

/// A many-to-many relation hanging off an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Human-readable name, e.g. "related products".
    pub label: &'static str,
    /// Template of the fetch path, with an `{id}` placeholder.
    pub fetch: &'static str,
    /// Template of the sync path, with an `{id}` placeholder.
    pub sync: &'static str,
    /// Body key carrying the id set on sync.
    pub ids_key: &'static str,
}

impl Relation {
    /// Fetches the current members of the relation for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] for an empty `id`,
    /// [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body has another shape.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        client: &RestClient,
        id: &str,
    ) -> Result<T, ResourceError> {
        let response = client.get(&self.path(self.fetch, id, "fetch")?, None).await?;

        serde_json::from_value(response.body).map_err(|source| ResourceError::Decode {
            resource: self.label,
            source,
        })
    }

    /// Replaces the members of the relation for `id` with `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] for an empty `id` and
    /// [`ResourceError::Rest`] if the request fails.
    pub async fn sync(
        &self,
        client: &RestClient,
        id: &str,
        ids: &[String],
    ) -> Result<(), ResourceError> {
        client
            .post(&self.path(self.sync, id, "sync")?, self.sync_body(ids))
            .await?;
        Ok(())
    }

    fn path(
        &self,
        template: &str,
        id: &str,
        operation: &'static str,
    ) -> Result<String, ResourceError> {
        if id.is_empty() {
            return Err(ResourceError::PathResolutionFailed {
                resource: self.label,
                operation,
            });
        }
        let mut ids = HashMap::new();
        ids.insert("id", id);
        Ok(build_path(template, &ids))
    }

    fn sync_body(&self, ids: &[String]) -> Value {
        let mut body = Map::new();
        body.insert(
            self.ids_key.to_string(),
            Value::Array(ids.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(body)
    }
}
