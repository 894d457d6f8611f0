//! Product resource implementation.
//!
//! Products are the sellable items of the catalog. Besides the generic
//! operations a product carries media and two replace-all relations: its
//! related products and the attribute values assigned to it.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_admin::rest::{RestResource, PageParams, SearchParams};
//! use catalog_admin::rest::resources::Product;
//!
//! let page = Product::all(&client, &PageParams::new(1, 10)).await?;
//! let found = Product::search(&client, &SearchParams::new("linen", 1, 10)).await?;
//!
//! let product = Product::find(&client, "p-1").await?;
//! let related = Product::related(&client, &product.id).await?;
//! Product::sync_related(&client, &product.id, &["p-2".to_string()]).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resource::{decode, dispatch};
use crate::rest::{PageParams, Relation, ResourceError, ResourceOperation, ResourcePath, RestResource};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The server-assigned identifier.
    pub id: String,

    /// The display name.
    pub name: String,

    /// URL-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Stock keeping unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Price in the store currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// The category the product belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,

    /// Whether the product is visible in the storefront.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// When the product was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CreateProductRequest {
    /// The display name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for updating a product. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The short form of a product returned by the related-products relation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ShortProduct {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A media file attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Medium {
    pub id: String,
    /// Public URL of the file.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Sort position among the product's media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// A product together with its media.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductWithMedium {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub medium: Option<Vec<Medium>>,
}

/// One attribute value assigned to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    pub attribute_id: String,
    pub attribute_name: String,
    pub value_id: String,
    pub value: String,
}

/// The attributes of a product, grouped by attribute group.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttributeGroup {
    pub group_id: String,
    pub group_name: String,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
}

impl Product {
    /// Products related to a product.
    pub const RELATED_PRODUCTS: Relation = Relation {
        label: "related products",
        fetch: "product/id/{id}/related_product",
        sync: "product/{id}/sync-related-product",
        ids_key: "product_ids",
    };

    /// Attribute values assigned to a product.
    pub const ATTRIBUTE_VALUES: Relation = Relation {
        label: "product attributes",
        fetch: "product/id/{id}/attributes",
        sync: "product/{id}/sync-attribute-value",
        ids_key: "attribute_value_ids",
    };

    /// Fetches a product together with its media.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails and
    /// [`ResourceError::Decode`] if the body cannot be read.
    pub async fn find_with_medium(
        client: &RestClient,
        id: &str,
    ) -> Result<ProductWithMedium, ResourceError> {
        // `with_medium` only selects the media path; it has no placeholder.
        let body = dispatch::<Self>(
            client,
            ResourceOperation::Find,
            &[("id", id), ("with_medium", "true")],
            None,
            None,
        )
        .await?;
        decode::<Self, ProductWithMedium>(body)
    }

    /// Fetches the products related to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body cannot be read.
    pub async fn related(client: &RestClient, id: &str) -> Result<Vec<ShortProduct>, ResourceError> {
        Self::RELATED_PRODUCTS.fetch(client, id).await
    }

    /// Replaces the related products of `id` with `product_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn sync_related(
        client: &RestClient,
        id: &str,
        product_ids: &[String],
    ) -> Result<(), ResourceError> {
        Self::RELATED_PRODUCTS.sync(client, id, product_ids).await
    }

    /// Fetches the attribute tree of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body cannot be read.
    pub async fn attributes(
        client: &RestClient,
        id: &str,
    ) -> Result<Vec<ProductAttributeGroup>, ResourceError> {
        Self::ATTRIBUTE_VALUES.fetch(client, id).await
    }

    /// Replaces the attribute values of `id` with `attribute_value_ids`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] if the request fails.
    pub async fn sync_attributes(
        client: &RestClient,
        id: &str,
        attribute_value_ids: &[String],
    ) -> Result<(), ResourceError> {
        Self::ATTRIBUTE_VALUES
            .sync(client, id, attribute_value_ids)
            .await
    }
}

impl RestResource for Product {
    type ListParams = PageParams;
    type CreateRequest = CreateProductRequest;
    type UpdateRequest = UpdateProductRequest;

    const NAME: &'static str = "product";
    const PLURAL: &'static str = "products";
    const SEARCH_KEY: &'static str = "product";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "product"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Search, &[], "product/find"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "product/id/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id", "with_medium"],
            "product/id/{id}/with-medium",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "product"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "product/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "product/{id}",
        ),
    ];

    fn id(&self) -> &str {
        &self.id
    }
}
