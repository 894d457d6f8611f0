//! Attribute group resource implementation.
//!
//! Attribute groups bundle related attributes (e.g. "Fabric" holding
//! "Material" and "Weave") for display on a product page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{PageParams, ResourceOperation, ResourcePath, RestResource};

/// A named group of attributes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeGroup {
    /// The server-assigned identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// Sort position among groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,

    /// When the group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the group was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating an attribute group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateAttributeGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Payload for updating an attribute group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateAttributeGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl RestResource for AttributeGroup {
    type ListParams = PageParams;
    type CreateRequest = CreateAttributeGroupRequest;
    type UpdateRequest = UpdateAttributeGroupRequest;

    const NAME: &'static str = "attribute group";
    const PLURAL: &'static str = "attribute groups";
    const SEARCH_KEY: &'static str = "attribute";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "attribute-group"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Search,
            &[],
            "attribute-group/find",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "attribute-group/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "attribute-group",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "attribute-group/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "attribute-group/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
