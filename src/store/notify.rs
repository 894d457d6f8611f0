//! User-facing notifications emitted by store operations.
//!
//! A store reports every failure and every successful mutation exactly once
//! through a [`Notifier`]. Delivery is fire-and-forget: a notifier that
//! cannot deliver drops the notification.
//!
//! # Example
//!
//! ```rust
//! use catalog_admin::store::{ChannelNotifier, Notification, Notifier};
//!
//! let (notifier, mut rx) = ChannelNotifier::channel();
//! notifier.notify(Notification::success("✅ Success create"));
//!
//! let received = rx.try_recv().unwrap();
//! assert_eq!(received.title, "✅ Success create");
//! ```

use tokio::sync::mpsc;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationVariant {
    /// The operation succeeded.
    Success,
    /// The operation failed.
    Destructive,
}

/// A human-readable message about the outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Optional detail line.
    pub description: Option<String>,
    /// Presentation variant.
    pub variant: NotificationVariant,
}

impl Notification {
    /// A success notification without description.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NotificationVariant::Success,
        }
    }

    /// A failure notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Receives notifications from stores.
pub trait Notifier: Send + Sync {
    /// Delivers one notification. Must not block.
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.as_deref().unwrap_or_default();
        match notification.variant {
            NotificationVariant::Success => {
                tracing::info!(title = %notification.title, "{description}");
            }
            NotificationVariant::Destructive => {
                tracing::warn!(title = %notification.title, "{description}");
            }
        }
    }
}

/// Queues notifications on an unbounded channel for a UI to drain.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end of its queue.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            tracing::debug!(title = %e.0.title, "notification dropped, receiver closed");
        }
    }
}

/// The kind of store operation, used to word its notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreAction {
    List,
    Search,
    Get,
    Create,
    Update,
    Delete,
    FetchRelation(&'static str),
    SyncRelation(&'static str),
}

impl StoreAction {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::FetchRelation(_) => "fetch_relation",
            Self::SyncRelation(_) => "sync_relation",
        }
    }

    /// Headline of the failure notification.
    pub(crate) fn failure_title(self, name: &str, plural: &str) -> String {
        match self {
            Self::List => format!("Error fetching {plural}"),
            Self::Search => format!("Error searching {plural}"),
            Self::Get => format!("Error fetching {name}"),
            Self::Create => format!("Error creating {name}"),
            Self::Update => format!("Error updating {name}"),
            Self::Delete => format!("Error deleting {name}"),
            Self::FetchRelation(label) => format!("Error fetching {label}"),
            Self::SyncRelation(label) => format!("Error syncing {label}"),
        }
    }

    /// Description used when the error carries no message.
    pub(crate) fn fallback_description(self, name: &str, plural: &str) -> String {
        match self {
            Self::List => format!("An error occurred while fetching {plural}"),
            Self::Search => format!("An error occurred while searching {plural}"),
            Self::Get => format!("An error occurred while fetching the {name}"),
            Self::Create => format!("An error occurred while creating the {name}"),
            Self::Update => format!("An error occurred while updating the {name}"),
            Self::Delete => format!("An error occurred while deleting the {name}"),
            Self::FetchRelation(label) => format!("An error occurred while fetching {label}"),
            Self::SyncRelation(label) => format!("An error occurred while syncing {label}"),
        }
    }

    /// Headline of the success notification; reads never notify on success.
    pub(crate) fn success_title(self) -> Option<String> {
        match self {
            Self::List | Self::Search | Self::Get | Self::FetchRelation(_) => None,
            Self::Create => Some("✅ Success create".to_string()),
            Self::Update => Some("✅ Success update".to_string()),
            Self::Delete => Some("✅ Success delete".to_string()),
            Self::SyncRelation(label) => Some(format!("✅ {} updated", capitalize(label))),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
