//! Observable store state and the in-flight guard.

use tokio::sync::watch;

use crate::rest::PaginatedCollection;

/// Snapshot of one entity family's client-side state.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    in_flight: usize,
    /// The last successfully listed or searched page; `None` until then.
    pub collection: Option<PaginatedCollection<T>>,
    /// The selected entity.
    pub current: Option<T>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            in_flight: 0,
            collection: None,
            current: None,
        }
    }
}

impl<T> StoreState<T> {
    /// Returns `true` while at least one operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Number of operations started and not yet finished.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }
}

/// Marks one operation in flight for as long as it lives.
///
/// Released on drop, so a failed or abandoned operation still clears its
/// mark.
pub(crate) struct LoadingGuard<'a, T> {
    state: &'a watch::Sender<StoreState<T>>,
}

impl<'a, T> LoadingGuard<'a, T> {
    pub(crate) fn acquire(state: &'a watch::Sender<StoreState<T>>) -> Self {
        state.send_modify(|s| s.in_flight += 1);
        Self { state }
    }
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.state
            .send_modify(|s| s.in_flight = s.in_flight.saturating_sub(1));
    }
}
