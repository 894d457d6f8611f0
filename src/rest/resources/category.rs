//! Category resource implementation.
//!
//! Categories form a tree through `parent_id`; the API serves them flat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{PageParams, ResourceOperation, ResourcePath, RestResource};

/// A node of the category tree.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    /// The server-assigned identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// The parent category; `None` for a root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Payload for updating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl RestResource for Category {
    type ListParams = PageParams;
    type CreateRequest = CreateCategoryRequest;
    type UpdateRequest = UpdateCategoryRequest;

    const NAME: &'static str = "category";
    const PLURAL: &'static str = "categories";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "category"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "category/find"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "category/{id}"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "category"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "category/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "category/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
