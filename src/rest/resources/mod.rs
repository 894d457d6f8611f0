//! Catalog resource implementations.
//!
//! One module per entity family. Every type implements
//! [`RestResource`](crate::rest::RestResource); products and attribute
//! values add inherent operations on top.
//!
//! ```rust,ignore
//! use catalog_admin::rest::{RestResource, PageParams};
//! use catalog_admin::rest::resources::{Attribute, AttributeValue};
//!
//! let attributes = Attribute::all(&client, &PageParams::new(1, 10)).await?;
//! let values = AttributeValue::all_for_attribute(&client, &attributes.items[0].id).await?;
//! ```

mod attribute;
mod attribute_group;
mod attribute_value;
mod category;
mod collection;
mod product;

pub use attribute::{Attribute, CreateAttributeRequest};
pub use attribute_group::{
    AttributeGroup, CreateAttributeGroupRequest, UpdateAttributeGroupRequest,
};
pub use attribute_value::{
    AttributeValue, AttributeValueListParams, CreateAttributeValueRequest,
    UpdateAttributeValueRequest,
};
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use collection::{Collection, CreateCollectionRequest, UpdateCollectionRequest};
pub use product::{
    CreateProductRequest, Medium, Product, ProductAttribute, ProductAttributeGroup,
    ProductWithMedium, ShortProduct, UpdateProductRequest,
};
