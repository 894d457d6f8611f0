//! The generic resource store.
//!
//! A [`ResourceStore`] wraps the service of one entity family. Every
//! operation marks itself in flight, calls the service once, writes the
//! result into the store state, and reports the outcome through the
//! [`Notifier`]. Failures are notified once and then returned unchanged.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::clients::RestClient;
use crate::rest::resources::AttributeValue;
use crate::rest::{PaginatedCollection, ResourceError, RestResource, SearchParams};
use crate::store::notify::{Notification, Notifier, StoreAction};
use crate::store::state::{LoadingGuard, StoreState};
use crate::store::StoreError;

/// Whether a successful update replaces the current entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurrentRefresh {
    /// Leave `current` as it was before the update.
    #[default]
    Keep,
    /// Replace `current` with the entity the server returned.
    Refresh,
}

/// Client-side state and operations for one entity family.
///
/// Operations take `&self` and may overlap; the store stays loading until
/// the last one finishes. State changes are published on a watch channel,
/// see [`subscribe`](Self::subscribe).
///
/// # Example
///
/// ```rust,ignore
/// use catalog_admin::rest::PageParams;
///
/// let store = ResourceStore::<Attribute>::new(client, notifier);
/// store.load(&PageParams::new(1, 10)).await?;
/// store.load_by_id("a-1").await?;
///
/// let request = CreateAttributeRequest { name: "Weave".into(), ..Default::default() };
/// store.update(&request).await?;
/// ```
pub struct ResourceStore<R: RestResource> {
    client: Arc<RestClient>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<StoreState<R>>,
    update_refresh: CurrentRefresh,
}

// Verify ResourceStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceStore<crate::rest::resources::Product>>();
};

impl<R: RestResource> fmt::Debug for ResourceStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStore")
            .field("resource", &R::NAME)
            .field("in_flight", &self.state.borrow().in_flight())
            .field("update_refresh", &self.update_refresh)
            .finish_non_exhaustive()
    }
}

impl<R: RestResource> ResourceStore<R> {
    /// Creates an empty store.
    #[must_use]
    pub fn new(client: Arc<RestClient>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            client,
            notifier,
            state,
            update_refresh: CurrentRefresh::default(),
        }
    }

    /// Sets the default refresh policy for [`update`](Self::update).
    #[must_use]
    pub fn with_update_refresh(mut self, policy: CurrentRefresh) -> Self {
        self.update_refresh = policy;
        self
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StoreState<R>> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> StoreState<R> {
        self.state.borrow().clone()
    }

    /// Returns `true` while any operation is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Returns the selected entity.
    #[must_use]
    pub fn current(&self) -> Option<R> {
        self.state.borrow().current.clone()
    }

    /// Returns the last listed page.
    #[must_use]
    pub fn collection(&self) -> Option<PaginatedCollection<R>> {
        self.state.borrow().collection.clone()
    }

    /// Returns the default refresh policy for updates.
    #[must_use]
    pub const fn update_refresh(&self) -> CurrentRefresh {
        self.update_refresh
    }

    pub(crate) fn client(&self) -> &RestClient {
        &self.client
    }

    pub(crate) fn set_current(&self, current: Option<R>) {
        self.state.send_modify(|s| s.current = current);
    }

    /// Lists one page and stores it as the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails; the previous
    /// collection is kept.
    pub async fn load(&self, params: &R::ListParams) -> Result<(), StoreError> {
        self.run(StoreAction::List, R::all(&self.client, params), |page| {
            self.set_collection(page);
        })
        .await
        .map(|_| ())
    }

    /// Searches by free text and stores the result as the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn search(&self, params: &SearchParams) -> Result<(), StoreError> {
        self.run(StoreAction::Search, R::search(&self.client, params), |page| {
            self.set_collection(page);
        })
        .await
        .map(|_| ())
    }

    /// Fetches one entity and selects it as current.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails; `current` is
    /// left unchanged.
    pub async fn load_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.run(StoreAction::Get, R::find(&self.client, id), |entity| {
            self.set_current(Some(entity.clone()));
        })
        .await
        .map(|_| ())
    }

    /// Creates an entity and returns it. The new entity is not selected.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn create(&self, request: &R::CreateRequest) -> Result<R, StoreError> {
        self.run(StoreAction::Create, R::create(&self.client, request), |_| {})
            .await
    }

    /// Updates the current entity using the store's refresh policy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoCurrentEntity`] without any request when no
    /// entity is selected or the selected one has an empty id, and
    /// [`StoreError::Resource`] if the request fails.
    pub async fn update(&self, request: &R::UpdateRequest) -> Result<R, StoreError> {
        self.update_with(request, self.update_refresh).await
    }

    /// Updates the current entity with an explicit refresh policy.
    ///
    /// With [`CurrentRefresh::Refresh`] the returned entity replaces
    /// `current`, unless the selection changed while the request ran.
    ///
    /// # Errors
    ///
    /// Same as [`update`](Self::update).
    pub async fn update_with(
        &self,
        request: &R::UpdateRequest,
        refresh: CurrentRefresh,
    ) -> Result<R, StoreError> {
        let id = self
            .state
            .borrow()
            .current
            .as_ref()
            .map(|current| current.id().to_string())
            .filter(|id| !id.is_empty())
            .ok_or(StoreError::NoCurrentEntity { resource: R::NAME })?;

        self.run(
            StoreAction::Update,
            R::update(&self.client, &id, request),
            |updated| {
                if refresh == CurrentRefresh::Refresh {
                    self.state.send_if_modified(|s| {
                        let selected = s.current.as_ref().is_some_and(|c| c.id() == id);
                        if selected {
                            s.current = Some(updated.clone());
                        }
                        selected
                    });
                }
            },
        )
        .await
    }

    /// Deletes an entity by id.
    ///
    /// Neither the collection nor `current` is touched; re-list to refresh.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.run(StoreAction::Delete, R::delete(&self.client, id), |_| {})
            .await
    }

    /// Clears the selected entity.
    pub fn clear_current(&self) {
        self.set_current(None);
    }

    fn set_collection(&self, page: &PaginatedCollection<R>) {
        self.state
            .send_modify(|s| s.collection = Some(page.clone()));
    }

    /// Runs one service call under the store's bookkeeping.
    ///
    /// `apply` writes the result into state before the in-flight mark is
    /// released, so subscribers never see an idle store without its data.
    pub(crate) async fn run<T, F>(
        &self,
        action: StoreAction,
        call: F,
        apply: impl FnOnce(&T),
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, ResourceError>>,
    {
        tracing::debug!(resource = R::NAME, action = action.as_str(), "store operation started");

        let guard = LoadingGuard::acquire(&self.state);
        let result = call.await;

        match result {
            Ok(value) => {
                apply(&value);
                drop(guard);

                if let Some(title) = action.success_title() {
                    self.notifier.notify(Notification::success(title));
                }
                Ok(value)
            }
            Err(error) => {
                drop(guard);

                let error = StoreError::from(error);
                tracing::warn!(
                    resource = R::NAME,
                    action = action.as_str(),
                    error = %error,
                    "store operation failed"
                );

                let description = error
                    .message()
                    .unwrap_or_else(|| action.fallback_description(R::NAME, R::PLURAL));
                self.notifier.notify(Notification::destructive(
                    action.failure_title(R::NAME, R::PLURAL),
                    description,
                ));
                Err(error)
            }
        }
    }
}

impl ResourceStore<AttributeValue> {
    /// Loads every value of one attribute as a single page.
    ///
    /// The page has `page == last_page == 1` and `total == page_size ==`
    /// the number of values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Resource`] if the request fails.
    pub async fn load_for_attribute(&self, attribute_id: &str) -> Result<(), StoreError> {
        let call = async {
            AttributeValue::all_for_attribute(&self.client, attribute_id)
                .await
                .map(PaginatedCollection::from_items)
        };

        self.run(StoreAction::List, call, |page| self.set_collection(page))
            .await
            .map(|_| ())
    }
}
