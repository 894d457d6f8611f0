//! Attribute resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{PageParams, ResourceOperation, ResourcePath, RestResource};

/// A product attribute such as "Material" or "Size".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Attribute {
    /// The server-assigned identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// The group this attribute belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_group_id: Option<String>,

    /// Whether storefront filters offer this attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_filterable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating or updating an attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateAttributeRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_filterable: Option<bool>,
}

impl RestResource for Attribute {
    type ListParams = PageParams;
    type CreateRequest = CreateAttributeRequest;
    // The API takes the full create payload on update.
    type UpdateRequest = CreateAttributeRequest;

    const NAME: &'static str = "attribute";
    const PLURAL: &'static str = "attributes";
    const SEARCH_KEY: &'static str = "attribute";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "attribute"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "attribute/find"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "attribute/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "attribute"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "attribute/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "attribute/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
