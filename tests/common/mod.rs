//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use catalog_admin::store::{CatalogStores, ChannelNotifier, Notification};
use catalog_admin::{AccessToken, AdminConfig, ApiBaseUrl, CurrentRefresh, RestClient};
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Builds a configuration pointing at the mock server.
pub fn config(server: &MockServer) -> AdminConfig {
    AdminConfig::builder()
        .api_base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new(TOKEN).unwrap())
        .build()
        .unwrap()
}

pub fn client(server: &MockServer) -> RestClient {
    RestClient::new(&config(server)).unwrap()
}

/// Builds every store against the mock server, plus the notification queue.
pub fn stores(
    server: &MockServer,
    refresh: CurrentRefresh,
) -> (CatalogStores, UnboundedReceiver<Notification>) {
    let (notifier, rx) = ChannelNotifier::channel();
    let stores = CatalogStores::with_client(Arc::new(client(server)), Arc::new(notifier), refresh);
    (stores, rx)
}

/// Drains every queued notification.
pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification);
    }
    out
}

pub fn page(items: Vec<Value>, page: u32, page_size: u32, total: u64, last_page: u32) -> Value {
    json!({
        "items": items,
        "pagination": {
            "page": page,
            "page_size": page_size,
            "total": total,
            "last_page": last_page
        }
    })
}

pub fn product(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name})
}

pub fn attribute_value(id: &str, attribute_id: &str, value: &str) -> Value {
    json!({"id": id, "attribute_id": attribute_id, "value": value})
}
