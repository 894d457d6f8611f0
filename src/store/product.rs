//! The product store.
//!
//! Products get the generic operations of [`ResourceStore`] plus media and
//! the two product relations. Relation caches live in their own watch
//! channel and describe whichever product they were last fetched for.

use std::ops::Deref;
use std::sync::Arc;

use tokio::sync::watch;

use crate::clients::RestClient;
use crate::rest::resources::{Medium, Product, ProductAttributeGroup, ShortProduct};
use crate::store::notify::{Notifier, StoreAction};
use crate::store::{ResourceStore, StoreError};

/// Cached relations of a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRelations {
    /// Media of the product loaded with [`ProductStore::load_with_medium`].
    pub medium: Vec<Medium>,
    /// Related products.
    pub related: Vec<ShortProduct>,
    /// Attribute tree.
    pub attribute_groups: Vec<ProductAttributeGroup>,
}

/// Store for products and their relations.
///
/// Dereferences to the generic [`ResourceStore<Product>`] for list, search,
/// get, create, update and delete.
///
/// # Example
///
/// ```rust,ignore
/// products.load_by_id("p-1").await?;
/// products.load_related("p-1").await?;
///
/// // Replace-all: this removes every relation not listed.
/// products.sync_related("p-1", &["p-2".to_string()]).await?;
/// ```
#[derive(Debug)]
pub struct ProductStore {
    products: ResourceStore<Product>,
    relations: watch::Sender<ProductRelations>,
}

impl ProductStore {
    /// Creates an empty product store.
    #[must_use]
    pub fn new(client: Arc<RestClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self::from_store(ResourceStore::new(client, notifier))
    }

    /// Wraps a configured generic store.
    #[must_use]
    pub fn from_store(products: ResourceStore<Product>) -> Self {
        let (relations, _) = watch::channel(ProductRelations::default());
        Self {
            products,
            relations,
        }
    }

    /// Subscribes to relation cache changes.
    #[must_use]
    pub fn subscribe_relations(&self) -> watch::Receiver<ProductRelations> {
        self.relations.subscribe()
    }

    /// Returns a copy of the relation caches.
    #[must_use]
    pub fn relations(&self) -> ProductRelations {
        self.relations.borrow().clone()
    }

    /// Fetches a product with its media; selects the product and caches
    /// the media.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn load_with_medium(&self, id: &str) -> Result<(), StoreError> {
        let call = Product::find_with_medium(self.products.client(), id);

        self.products
            .run(StoreAction::Get, call, |found| {
                self.products.set_current(found.product.clone());
                self.relations.send_modify(|r| {
                    r.medium = found.medium.clone().unwrap_or_default();
                });
            })
            .await
            .map(|_| ())
    }

    /// Fetches the related products of `id` into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn load_related(&self, id: &str) -> Result<(), StoreError> {
        let call = Product::related(self.products.client(), id);
        let action = StoreAction::FetchRelation(Product::RELATED_PRODUCTS.label);

        self.products
            .run(action, call, |related| {
                self.relations.send_modify(|r| r.related = related.clone());
            })
            .await
            .map(|_| ())
    }

    /// Replaces the related products of `id`.
    ///
    /// The cache is not re-fetched; call [`load_related`](Self::load_related)
    /// to refresh it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn sync_related(&self, id: &str, product_ids: &[String]) -> Result<(), StoreError> {
        let call = Product::sync_related(self.products.client(), id, product_ids);
        let action = StoreAction::SyncRelation(Product::RELATED_PRODUCTS.label);

        self.products.run(action, call, |_| {}).await
    }

    /// Fetches the attribute tree of `id` into the cache.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn load_attributes(&self, id: &str) -> Result<(), StoreError> {
        let call = Product::attributes(self.products.client(), id);
        let action = StoreAction::FetchRelation(Product::ATTRIBUTE_VALUES.label);

        self.products
            .run(action, call, |groups| {
                self.relations
                    .send_modify(|r| r.attribute_groups = groups.clone());
            })
            .await
            .map(|_| ())
    }

    /// Replaces the attribute values of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn sync_attributes(
        &self,
        id: &str,
        attribute_value_ids: &[String],
    ) -> Result<(), StoreError> {
        let call = Product::sync_attributes(self.products.client(), id, attribute_value_ids);
        let action = StoreAction::SyncRelation(Product::ATTRIBUTE_VALUES.label);

        self.products.run(action, call, |_| {}).await
    }

    /// Clears the selected product and every relation cache.
    pub fn clear_current(&self) {
        self.products.clear_current();
        self.relations.send_replace(ProductRelations::default());
    }
}

impl Deref for ProductStore {
    type Target = ResourceStore<Product>;

    fn deref(&self) -> &Self::Target {
        &self.products
    }
}
