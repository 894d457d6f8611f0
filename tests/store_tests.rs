//! Integration tests for the resource stores.
//!
//! Each test runs the stores against a wiremock server and checks state,
//! loading, and the notifications emitted.

mod common;

use std::time::Duration;

use catalog_admin::rest::resources::{
    AttributeValueListParams, CreateAttributeGroupRequest, CreateProductRequest,
    UpdateAttributeGroupRequest, UpdateCategoryRequest, UpdateProductRequest,
};
use catalog_admin::rest::{PageParams, ResourceError, SearchParams};
use catalog_admin::store::NotificationVariant;
use catalog_admin::{CurrentRefresh, StoreError};
use common::{attribute_value, drain, page, product, stores};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_load_first_page_of_small_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![product("p-1", "A"), product("p-2", "B"), product("p-3", "C")],
            1,
            10,
            3,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.products.load(&PageParams::new(1, 10)).await);

    let collection = stores.products.collection().unwrap();
    assert_eq!(collection.len(), 3);
    assert!(collection.len() <= collection.pagination.page_size as usize);
    assert_eq!(collection.pagination.last_page, 1);
    assert!(!stores.products.is_loading());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_failed_load_keeps_previous_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-group"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "g-1", "name": "Fabric"})],
            1,
            10,
            1,
            1,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/attribute-group"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.attribute_groups.load(&PageParams::new(1, 10)).await);
    assert_err!(stores.attribute_groups.load(&PageParams::new(2, 10)).await);

    let collection = stores.attribute_groups.collection().unwrap();
    assert_eq!(collection.items[0].id, "g-1");
    assert!(!stores.attribute_groups.is_loading());

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Error fetching attribute groups");
    assert_eq!(
        notifications[0].description.as_deref(),
        Some("An error occurred while fetching attribute groups")
    );
}

#[tokio::test]
async fn test_attribute_value_list_sends_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-value"))
        .and(query_param("attribute_id", "a-1"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![attribute_value("v-1", "a-1", "Linen")],
            1,
            5,
            1,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);
    let params = AttributeValueListParams {
        page: 1,
        page_size: 5,
        attribute_id: Some("a-1".to_string()),
    };

    assert_ok!(stores.attribute_values.load(&params).await);
    assert_eq!(stores.attribute_values.collection().unwrap().items[0].value, "Linen");
}

#[tokio::test]
async fn test_load_for_attribute_wraps_flat_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute/a-1/values"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            attribute_value("v-1", "a-1", "Linen"),
            attribute_value("v-2", "a-1", "Wool"),
            attribute_value("v-3", "a-1", "Silk"),
            attribute_value("v-4", "a-1", "Cotton"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.attribute_values.load_for_attribute("a-1").await);

    let collection = stores.attribute_values.collection().unwrap();
    assert_eq!(collection.len(), 4);
    assert_eq!(collection.pagination.total, 4);
    assert_eq!(collection.pagination.page_size, 4);
    assert_eq!(collection.pagination.page, 1);
    assert_eq!(collection.pagination.last_page, 1);
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_uses_resource_key_and_replaces_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute/find"))
        .and(query_param("attribute", "mat"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "a-1", "name": "Material"})],
            1,
            10,
            1,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.attributes.search(&SearchParams::new("mat", 1, 10)).await);
    assert_eq!(stores.attributes.collection().unwrap().items[0].name, "Material");
}

#[tokio::test]
async fn test_product_search_accepts_flat_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/find"))
        .and(query_param("product", "linen"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([product("p-1", "Linen shirt"), product("p-2", "Linen scarf")])),
        )
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.products.search(&SearchParams::new("linen", 1, 10)).await);

    let collection = stores.products.collection().unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.pagination.last_page, 1);
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_load_by_id_rejected_notifies_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product("p-1", "Linen shirt")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    assert_ok!(stores.products.load_by_id("p-1").await);

    let error = assert_err!(stores.products.load_by_id("p-404").await);
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.message().as_deref(), Some("not found"));

    assert_eq!(stores.products.current().unwrap().id, "p-1");
    assert!(!stores.products.is_loading());

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].variant, NotificationVariant::Destructive);
    assert_eq!(notifications[0].title, "Error fetching product");
    assert_eq!(notifications[0].description.as_deref(), Some("not found"));
}

#[tokio::test]
async fn test_load_by_id_selects_current() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-group/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabric"})))
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.attribute_groups.load_by_id("g-1").await);
    assert_eq!(stores.attribute_groups.current().unwrap().name, "Fabric");
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_load_with_medium_selects_product_and_caches_media() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1/with-medium"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": product("p-1", "Linen shirt"),
            "medium": [{"id": "m-1", "url": "https://cdn.example.com/m-1.jpg"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.products.load_with_medium("p-1").await);

    assert_eq!(stores.products.current().unwrap().id, "p-1");
    assert_eq!(stores.products.relations().medium[0].id, "m-1");
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[tokio::test]
async fn test_create_returns_entity_without_selecting_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-group/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabric"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/attribute-group"))
        .and(body_json(json!({"name": "Size"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "g-9", "name": "Size"})))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    assert_ok!(stores.attribute_groups.load_by_id("g-1").await);
    let request = CreateAttributeGroupRequest {
        name: "Size".to_string(),
        position: None,
    };

    let created = assert_ok!(stores.attribute_groups.create(&request).await);

    assert_eq!(created.id, "g-9");
    assert_eq!(stores.attribute_groups.current().unwrap().id, "g-1");

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].variant, NotificationVariant::Success);
    assert_eq!(notifications[0].title, "✅ Success create");
}

#[tokio::test]
async fn test_create_failure_notifies_with_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    let request = CreateProductRequest {
        name: "Linen shirt".to_string(),
        ..Default::default()
    };

    assert_err!(stores.products.create(&request).await);

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Error creating product");
    assert_eq!(
        notifications[0].description.as_deref(),
        Some("An error occurred while creating the product")
    );
}

#[tokio::test]
async fn test_update_without_current_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    let error = assert_err!(stores.products.update(&UpdateProductRequest::default()).await);

    assert!(matches!(error, StoreError::NoCurrentEntity { resource: "product" }));
    assert!(!stores.products.is_loading());
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_update_with_blank_current_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "", "name": "Shirts"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "", "name": "Shirts"})))
        .expect(0)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    assert_ok!(stores.categories.load_by_id("c-1").await);

    let error = assert_err!(stores.categories.update(&UpdateCategoryRequest::default()).await);

    assert!(matches!(error, StoreError::NoCurrentEntity { resource: "category" }));
    assert_eq!(stores.categories.current().unwrap().name, "Shirts");
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_blank_id_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    let fetched = assert_err!(stores.categories.load_by_id("").await);
    let deleted = assert_err!(stores.categories.delete("").await);
    let synced = assert_err!(stores.products.sync_related("", &[]).await);

    for error in [fetched, deleted, synced] {
        assert!(matches!(
            error,
            StoreError::Resource(ResourceError::PathResolutionFailed { .. })
        ));
    }
    assert!(stores.categories.current().is_none());
    assert!(!stores.categories.is_loading());
    assert_eq!(drain(&mut rx).len(), 3);
}

#[tokio::test]
async fn test_update_keeps_current_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-group/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabric"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/attribute-group/g-1"))
        .and(body_json(json!({"name": "Fabrics"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabrics"})))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    let request = UpdateAttributeGroupRequest {
        name: Some("Fabrics".to_string()),
        position: None,
    };

    assert_ok!(stores.attribute_groups.load_by_id("g-1").await);
    let updated = assert_ok!(stores.attribute_groups.update(&request).await);

    assert_eq!(updated.name, "Fabrics");
    assert_eq!(stores.attribute_groups.current().unwrap().name, "Fabric");

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "✅ Success update");
}

#[tokio::test]
async fn test_update_with_refresh_replaces_current() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute-group/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabric"})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/attribute-group/g-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "g-1", "name": "Fabrics"})))
        .expect(2)
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Refresh);
    let request = UpdateAttributeGroupRequest {
        name: Some("Fabrics".to_string()),
        position: None,
    };

    assert_ok!(stores.attribute_groups.load_by_id("g-1").await);
    assert_ok!(stores.attribute_groups.update(&request).await);
    assert_eq!(stores.attribute_groups.current().unwrap().name, "Fabrics");

    // A per-call policy overrides the store default.
    assert_ok!(stores.attribute_groups.load_by_id("g-1").await);
    assert_ok!(
        stores
            .attribute_groups
            .update_with(&request, CurrentRefresh::Keep)
            .await
    );
    assert_eq!(stores.attribute_groups.current().unwrap().name, "Fabric");
}

#[tokio::test]
async fn test_delete_leaves_collection_and_current() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![json!({"id": "c-1", "name": "Shirts"})],
            1,
            10,
            1,
            1,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/category/c-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c-1", "name": "Shirts"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/category/c-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.categories.load(&PageParams::default()).await);
    assert_ok!(stores.categories.load_by_id("c-1").await);
    assert_ok!(stores.categories.delete("c-1").await);

    assert_eq!(stores.categories.collection().unwrap().len(), 1);
    assert_eq!(stores.categories.current().unwrap().id, "c-1");

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "✅ Success delete");
}

#[tokio::test]
async fn test_delete_failure_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/collection/k-1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "collection has products"})),
        )
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_err!(stores.collections.delete("k-1").await);

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Error deleting collection");
    assert_eq!(
        notifications[0].description.as_deref(),
        Some("collection has products")
    );
}

// ============================================================================
// Selection
// ============================================================================

#[tokio::test]
async fn test_clear_current_empties_selection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attribute/a-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a-1", "name": "Material"})))
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);

    stores.attributes.clear_current();
    assert!(stores.attributes.current().is_none());

    assert_ok!(stores.attributes.load_by_id("a-1").await);
    stores.attributes.clear_current();
    assert!(stores.attributes.current().is_none());
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_overlapping_operations_stay_loading_until_last_finishes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![], 1, 10, 0, 0))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product("p-1", "Linen shirt"))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);
    let products = &stores.products;
    let params = PageParams::new(1, 10);

    let observe = async {
        tokio::time::sleep(Duration::from_millis(150)).await;
        products.is_loading()
    };

    let (listed, fetched, loading_midway) = tokio::join!(
        products.load(&params),
        products.load_by_id("p-1"),
        observe
    );

    assert_ok!(listed);
    assert_ok!(fetched);
    assert!(loading_midway);
    assert!(!products.is_loading());
}

#[tokio::test]
async fn test_subscribers_see_loading_transitions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/c-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (stores, _rx) = stores(&server, CurrentRefresh::Keep);
    let mut changes = stores.categories.subscribe();
    changes.borrow_and_update();

    assert_err!(stores.categories.load_by_id("c-1").await);

    assert!(changes.has_changed().unwrap());
    assert!(!changes.borrow_and_update().is_loading());
}

// ============================================================================
// Relations
// ============================================================================

#[tokio::test]
async fn test_sync_related_with_empty_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/product/p-1/sync-related-product"))
        .and(body_json(json!({"product_ids": []})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.products.sync_related("p-1", &[]).await);

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].variant, NotificationVariant::Success);
    assert_eq!(notifications[0].title, "✅ Related products updated");
}

#[tokio::test]
async fn test_sync_attributes_sends_full_set_without_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/product/p-1/sync-attribute-value"))
        .and(body_json(json!({"attribute_value_ids": ["v-1", "v-2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);
    let ids = vec!["v-1".to_string(), "v-2".to_string()];

    assert_ok!(stores.products.sync_attributes("p-1", &ids).await);

    let notifications = drain(&mut rx);
    assert_eq!(notifications[0].title, "✅ Product attributes updated");
}

#[tokio::test]
async fn test_load_related_and_attributes_fill_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1/related_product"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "p-2", "name": "Linen trousers"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "group_id": "g-1",
            "group_name": "Fabric",
            "attributes": [{
                "attribute_id": "a-1",
                "attribute_name": "Material",
                "value_id": "v-1",
                "value": "Linen"
            }]
        }])))
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_ok!(stores.products.load_related("p-1").await);
    assert_ok!(stores.products.load_attributes("p-1").await);

    let relations = stores.products.relations();
    assert_eq!(relations.related[0].id, "p-2");
    assert_eq!(relations.attribute_groups[0].attributes[0].value, "Linen");
    assert!(drain(&mut rx).is_empty());

    stores.products.clear_current();
    assert!(stores.products.relations().related.is_empty());
}

#[tokio::test]
async fn test_relation_fetch_failure_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/id/p-1/related_product"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream timeout"))
        .mount(&server)
        .await;

    let (stores, mut rx) = stores(&server, CurrentRefresh::Keep);

    assert_err!(stores.products.load_related("p-1").await);

    let notifications = drain(&mut rx);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Error fetching related products");
    assert_eq!(notifications[0].description.as_deref(), Some("upstream timeout"));
}
