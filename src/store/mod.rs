//! Client-side resource stores.
//!
//! A store wraps the REST service of one entity family and keeps:
//!
//! - a loading indicator (number of operations in flight)
//! - the last listed page (`collection`)
//! - one selected entity (`current`)
//!
//! Every operation reports its outcome through a [`Notifier`] and returns a
//! `Result`. Failures are notified exactly once and returned unchanged.
//!
//! Stores are built explicitly, usually all at once through
//! [`CatalogStores`], and shared by reference.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use catalog_admin::store::{CatalogStores, TracingNotifier};
//! use catalog_admin::rest::PageParams;
//!
//! let stores = CatalogStores::new(&config, Arc::new(TracingNotifier))?;
//!
//! stores.products.load(&PageParams::new(1, 10)).await?;
//! let page = stores.products.collection().unwrap();
//!
//! let mut changes = stores.attributes.subscribe();
//! tokio::spawn(async move {
//!     while changes.changed().await.is_ok() {
//!         println!("loading: {}", changes.borrow().is_loading());
//!     }
//! });
//! ```

mod engine;
mod errors;
mod notify;
mod product;
mod state;

use std::sync::Arc;

pub use engine::{CurrentRefresh, ResourceStore};
pub use errors::StoreError;
pub use notify::{ChannelNotifier, Notification, NotificationVariant, Notifier, TracingNotifier};
pub use product::{ProductRelations, ProductStore};
pub use state::StoreState;

use crate::clients::{RestClient, RestError};
use crate::config::AdminConfig;
use crate::rest::RestResource;
use crate::rest::resources::{Attribute, AttributeGroup, AttributeValue, Category, Collection};

/// Every catalog store, sharing one client and one notifier.
#[derive(Debug)]
pub struct CatalogStores {
    /// Products and their relations.
    pub products: ProductStore,
    /// Attributes.
    pub attributes: ResourceStore<Attribute>,
    /// Attribute groups.
    pub attribute_groups: ResourceStore<AttributeGroup>,
    /// Attribute values.
    pub attribute_values: ResourceStore<AttributeValue>,
    /// Categories.
    pub categories: ResourceStore<Category>,
    /// Collections.
    pub collections: ResourceStore<Collection>,
}

impl CatalogStores {
    /// Builds a client from `config` and every store on top of it.
    ///
    /// Each store takes its update refresh policy from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] if the HTTP client cannot be created.
    pub fn new(config: &AdminConfig, notifier: Arc<dyn Notifier>) -> Result<Self, RestError> {
        let client = Arc::new(RestClient::new(config)?);
        Ok(Self::with_client(client, notifier, config.update_refresh()))
    }

    /// Builds every store on an existing client.
    #[must_use]
    pub fn with_client(
        client: Arc<RestClient>,
        notifier: Arc<dyn Notifier>,
        update_refresh: CurrentRefresh,
    ) -> Self {
        Self {
            products: ProductStore::from_store(store(&client, &notifier, update_refresh)),
            attributes: store(&client, &notifier, update_refresh),
            attribute_groups: store(&client, &notifier, update_refresh),
            attribute_values: store(&client, &notifier, update_refresh),
            categories: store(&client, &notifier, update_refresh),
            collections: store(&client, &notifier, update_refresh),
        }
    }
}

fn store<R: RestResource>(
    client: &Arc<RestClient>,
    notifier: &Arc<dyn Notifier>,
    update_refresh: CurrentRefresh,
) -> ResourceStore<R> {
    ResourceStore::new(Arc::clone(client), Arc::clone(notifier)).with_update_refresh(update_refresh)
}

// Verify CatalogStores is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CatalogStores>();
};
