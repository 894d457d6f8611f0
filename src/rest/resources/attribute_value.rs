//! Attribute value resource implementation.
//!
//! Values are the concrete choices of an attribute ("Linen" for
//! "Material"). They can be listed page by page, optionally filtered by
//! attribute, or fetched in full for one attribute.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::rest::RestResource;
//! use catalog_admin::rest::resources::{AttributeValue, AttributeValueListParams};
//!
//! let params = AttributeValueListParams {
//!     attribute_id: Some("a-1".to_string()),
//!     ..Default::default()
//! };
//! let page = AttributeValue::all(&client, &params).await?;
//!
//! let every_value = AttributeValue::all_for_attribute(&client, "a-1").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resource::{decode, dispatch};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, RestResource};

/// One value of an attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AttributeValue {
    /// The server-assigned identifier.
    pub id: String,

    /// The attribute this value belongs to.
    pub attribute_id: String,

    /// The value text.
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating an attribute value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CreateAttributeValueRequest {
    pub attribute_id: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Payload for updating an attribute value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UpdateAttributeValueRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Parameters for listing attribute values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValueListParams {
    /// The 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Only values of this attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<String>,
}

impl Default for AttributeValueListParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            attribute_id: None,
        }
    }
}

impl AttributeValue {
    /// Fetches every value of one attribute as a flat list.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body is not a list of values.
    pub async fn all_for_attribute(
        client: &RestClient,
        attribute_id: &str,
    ) -> Result<Vec<Self>, ResourceError> {
        let body = dispatch::<Self>(
            client,
            ResourceOperation::All,
            &[("attribute_id", attribute_id)],
            None,
            None,
        )
        .await?;
        decode::<Self, Vec<Self>>(body)
    }
}

impl RestResource for AttributeValue {
    type ListParams = AttributeValueListParams;
    type CreateRequest = CreateAttributeValueRequest;
    type UpdateRequest = UpdateAttributeValueRequest;

    const NAME: &'static str = "attribute value";
    const PLURAL: &'static str = "attribute values";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "attribute-value"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["attribute_id"],
            "attribute/{attribute_id}/values",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Search,
            &[],
            "attribute-value/find",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "attribute-value/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "attribute-value",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "attribute-value/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "attribute-value/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
