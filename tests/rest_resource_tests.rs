//! Integration tests for the resource accessors.
//!
//! These tests drive resource types end to end against a mock server:
//! envelopes, paths, status mapping, nested resources and custom actions.

use serde_json::json;
use shopify_rest::rest::resources::{
    ApiPermissions, Customer, CustomerSearchParams, GiftCard, GiftCardSearchParams,
    HasMetafields, InventoryLevel, Metafield, Order, OrderRisk, Product, ProductListParams,
    ProductStatus, Redirect, RiskRecommendation, Theme, ThemeListParams, ThemeRole, Webhook,
};
use shopify_rest::rest::{ResourceError, RestResource};
use shopify_rest::{
    AccessToken, ApiVersion, Credentials, HostUrl, ListOptions, RestClient, ShopDomain,
    ShopifyConfig,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE_PATH: &str = "/admin/api/2026-07";

fn client_for(server: &MockServer) -> RestClient {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .credentials(Credentials::access_token(AccessToken::new("shpat_test").unwrap()))
        .api_version(ApiVersion::V2026_07)
        .base_url(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn api_path(rest: &str) -> String {
    format!("{BASE_PATH}/{rest}")
}

fn product_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "vendor": "Burton",
        "status": "active",
        "variants": [{"id": 808_950_810, "product_id": id, "price": "199.00", "sku": "IPOD2008PINK"}],
        "created_at": "2024-01-15T10:30:00-05:00"
    })
}

// ============================================================================
// Standard operations
// ============================================================================

#[tokio::test]
async fn test_find_decodes_envelope_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("products/632910392.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"product": product_json(632_910_392, "IPod Nano - 8GB")}))
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "1/40")
                .insert_header("X-Request-Id", "req-find"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let product = Product::find(&client_for(&server), 632_910_392, None)
        .await
        .unwrap();

    assert_eq!(product.title.as_deref(), Some("IPod Nano - 8GB"));
    assert_eq!(product.status, Some(ProductStatus::Active));
    assert_eq!(product.variants[0].price.as_deref(), Some("199.00"));
    assert_eq!(product.rate_limit().unwrap().request_count, 1);
    assert_eq!(product.request_id(), Some("req-find"));
    assert!(!product.has_next_page());
}

#[tokio::test]
async fn test_all_returns_every_element_and_next_page() {
    let server = MockServer::start().await;
    let next = format!(
        r#"<{}{BASE_PATH}/products.json?limit=3&page_info=eyJsYXN0X2lkIjozfQ>; rel="next""#,
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path(api_path("products.json")))
        .and(query_param("limit", "3"))
        .and(query_param("vendor", "Burton"))
        .and(query_param("status", "active,draft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [
                    product_json(1, "One"),
                    product_json(2, "Two"),
                    product_json(3, "Three")
                ]}))
                .insert_header("Link", next.as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductListParams {
        list: ListOptions {
            limit: Some(3),
            vendor: Some("Burton".to_string()),
            ..Default::default()
        },
        status: vec![ProductStatus::Active, ProductStatus::Draft],
        ..Default::default()
    };
    let page = Product::all(&client_for(&server), Some(params)).await.unwrap();

    assert_eq!(page.len(), 3);
    assert_eq!(page[2].title.as_deref(), Some("Three"));
    let next = page.next_page_options().unwrap();
    assert_eq!(next.page_info.as_deref(), Some("eyJsYXN0X2lkIjozfQ"));
    assert_eq!(next.limit, Some(3));
    assert!(!page.has_previous_page());
}

#[tokio::test]
async fn test_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("webhooks/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 7})))
        .mount(&server)
        .await;

    assert_eq!(Webhook::count(&client_for(&server), None).await.unwrap(), 7);
}

#[tokio::test]
async fn test_save_new_resource_posts_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("redirects.json")))
        .and(body_json(json!({"redirect": {"path": "/ipod", "target": "/pages/itunes"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "redirect": {"id": 979_034_150, "path": "/ipod", "target": "/pages/itunes"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let redirect = Redirect {
        path: Some("/ipod".to_string()),
        target: Some("/pages/itunes".to_string()),
        ..Default::default()
    };
    let created = redirect.save(&client_for(&server)).await.unwrap();

    assert_eq!(created.id, Some(979_034_150));
}

#[tokio::test]
async fn test_save_existing_resource_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(api_path("themes/828155753.json")))
        .and(body_json(json!({"theme": {"id": 828_155_753, "name": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "theme": {"id": 828_155_753, "name": "Renamed", "role": "main"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let theme = Theme {
        id: Some(828_155_753),
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let saved = theme.save(&client_for(&server)).await.unwrap();

    assert_eq!(saved.role, Some(ThemeRole::Main));
}

#[tokio::test]
async fn test_delete_and_delete_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("webhooks/4759306.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    Webhook::delete_by_id(&client, 4_759_306).await.unwrap();

    let webhook = Webhook {
        id: Some(4_759_306),
        ..Default::default()
    };
    webhook.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_delete_without_id_sends_nothing() {
    let server = MockServer::start().await;

    let error = Webhook::default().delete(&client_for(&server)).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed { resource: "Webhook", .. }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_operation_is_path_error() {
    let server = MockServer::start().await;

    let error = Theme::count(&client_for(&server), None).await.unwrap_err();
    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));

    let order = Order {
        email: Some("bob@example.com".to_string()),
        ..Default::default()
    };
    let error = order.save(&client_for(&server)).await.unwrap_err();
    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
}

// ============================================================================
// Status mapping
// ============================================================================

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("customers/999.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let error = Customer::find(&client_for(&server), 999, None).await.unwrap_err();

    match error {
        ResourceError::NotFound { resource, id } => {
            assert_eq!(resource, "Customer");
            assert_eq!(id, "999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_422_maps_to_validation_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("products.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"title": ["can't be blank"]}}))
                .insert_header("X-Request-Id", "req-422"),
        )
        .mount(&server)
        .await;

    let error = Product::default().save(&client_for(&server)).await.unwrap_err();

    assert_eq!(error.status(), Some(422));
    assert_eq!(error.request_id(), Some("req-422"));
    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(errors["title"], vec!["can't be blank"]);
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_422_with_base_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Inventory item does not have inventory tracking enabled"]
        })))
        .mount(&server)
        .await;

    let error = InventoryLevel::adjust(&client_for(&server), 1, 2, 5)
        .await
        .unwrap_err();

    let ResourceError::ValidationFailed { errors, .. } = error else {
        panic!("expected ValidationFailed, got {error:?}");
    };
    assert_eq!(
        errors["base"],
        vec!["Inventory item does not have inventory tracking enabled"]
    );
}

#[tokio::test]
async fn test_other_statuses_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": "[API] This action requires merchant approval for read_orders scope."
        })))
        .mount(&server)
        .await;

    let error = Order::all(&client_for(&server), None).await.unwrap_err();

    assert!(matches!(error, ResourceError::Http(_)));
    assert_eq!(error.status(), Some(403));
}

#[tokio::test]
async fn test_missing_envelope_key_is_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .mount(&server)
        .await;

    let error = Product::find(&client_for(&server), 1, None).await.unwrap_err();

    assert!(matches!(error, ResourceError::Http(_)));
    assert_eq!(error.status(), Some(200));
}

// ============================================================================
// Nested resources
// ============================================================================

#[tokio::test]
async fn test_order_risks_are_nested_under_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("orders/450789469/risks.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"risks": [
            {"id": 284_138_680, "order_id": 450_789_469, "recommendation": "cancel", "score": "1.0"},
            {"id": 1_029_151_489, "order_id": 450_789_469, "recommendation": "accept", "score": "0.0"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("orders/450789469/risks.json")))
        .and(body_json(json!({"risk": {
            "order_id": 450_789_469,
            "message": "This order came from an anonymous proxy",
            "recommendation": "cancel",
            "score": "1.0"
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"risk": {
            "id": 1_029_151_490,
            "order_id": 450_789_469,
            "message": "This order came from an anonymous proxy",
            "recommendation": "cancel",
            "score": "1.0"
        }})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("orders/450789469/risks/1029151490.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let risks = OrderRisk::all_with_parent(&client, "order_id", 450_789_469, None)
        .await
        .unwrap();
    assert_eq!(risks.len(), 2);
    assert_eq!(risks[1].recommendation, Some(RiskRecommendation::Accept));

    let risk = OrderRisk {
        order_id: Some(450_789_469),
        message: Some("This order came from an anonymous proxy".to_string()),
        recommendation: Some(RiskRecommendation::Cancel),
        score: Some("1.0".to_string()),
        ..Default::default()
    };
    let created = risk.save(&client).await.unwrap();
    assert_eq!(created.id, Some(1_029_151_490));

    created.delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_nested_resource_without_parent_is_path_error() {
    let server = MockServer::start().await;

    let error = OrderRisk::all(&client_for(&server), None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed { resource: "OrderRisk", .. }
    ));
}

#[tokio::test]
async fn test_product_metafields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("products/632910392/metafields.json")))
        .and(query_param("namespace", "inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metafields": [
            {"id": 1, "namespace": "inventory", "key": "warehouse", "value": 25, "type": "number_integer"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("products/632910392/metafields.json")))
        .and(body_json(json!({"metafield": {
            "namespace": "inventory",
            "key": "warehouse",
            "value": 25,
            "type": "number_integer"
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"metafield": {
            "id": 1_069_229_005,
            "namespace": "inventory",
            "key": "warehouse",
            "value": 25,
            "type": "number_integer",
            "owner_id": 632_910_392,
            "owner_resource": "product"
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let params = shopify_rest::rest::resources::MetafieldListParams {
        namespace: Some("inventory".to_string()),
        ..Default::default()
    };
    let metafields = Product::list_metafields(&client, 632_910_392, Some(params))
        .await
        .unwrap();
    assert_eq!(metafields.len(), 1);
    assert_eq!(metafields[0].value, Some(json!(25)));

    let metafield = Metafield {
        namespace: Some("inventory".to_string()),
        key: Some("warehouse".to_string()),
        value: Some(json!(25)),
        metafield_type: Some("number_integer".to_string()),
        ..Default::default()
    };
    let created = Product::create_metafield(&client, 632_910_392, &metafield)
        .await
        .unwrap();
    assert_eq!(created.id, Some(1_069_229_005));
    assert_eq!(created.owner_resource.as_deref(), Some("product"));
}

// ============================================================================
// Custom actions
// ============================================================================

#[tokio::test]
async fn test_customer_search_and_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("customers/search.json")))
        .and(query_param("query", "Bob country:United States"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": [
            {"id": 207_119_551, "email": "bob.norman@mail.example.com", "first_name": "Bob"}
        ]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("customers/207119551/orders.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": [
            {"id": 450_789_469, "name": "#1001", "total_price": "598.94"}
        ]})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let found = Customer::search(
        &client,
        &CustomerSearchParams {
            query: Some("Bob country:United States".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(found[0].first_name.as_deref(), Some("Bob"));

    let orders = Customer::orders(&client, 207_119_551, None).await.unwrap();
    assert_eq!(orders[0].name.as_deref(), Some("#1001"));
}

#[tokio::test]
async fn test_gift_card_disable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("gift_cards/1035197676/disable.json")))
        .and(body_json(json!({"gift_card": {"id": 1_035_197_676}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gift_card": {
            "id": 1_035_197_676,
            "balance": "100.00",
            "disabled_at": "2024-06-01T10:00:00-04:00"
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let card = GiftCard::disable(&client_for(&server), 1_035_197_676)
        .await
        .unwrap();

    assert!(card.is_disabled());
    assert_eq!(card.balance.as_deref(), Some("100.00"));
}

#[tokio::test]
async fn test_inventory_level_actions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/set.json")))
        .and(body_json(json!({
            "inventory_item_id": 808_950_810,
            "location_id": 655_441_491,
            "available": 42
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"inventory_level": {
            "inventory_item_id": 808_950_810,
            "location_id": 655_441_491,
            "available": 42
        }})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("inventory_levels.json")))
        .and(query_param("inventory_item_id", "808950810"))
        .and(query_param("location_id", "655441491"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let level = InventoryLevel::set(&client, 808_950_810, 655_441_491, 42, None)
        .await
        .unwrap();
    assert_eq!(level.available, Some(42));

    InventoryLevel::delete_at_location(&client, 808_950_810, 655_441_491)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_inventory_level_connect_sends_relocate_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("inventory_levels/connect.json")))
        .and(body_json(json!({
            "inventory_item_id": 808_950_810,
            "location_id": 844_681_632,
            "relocate_if_necessary": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"inventory_level": {
            "inventory_item_id": 808_950_810,
            "location_id": 844_681_632,
            "available": 0
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let level = InventoryLevel::connect(&client_for(&server), 808_950_810, 844_681_632, Some(true))
        .await
        .unwrap();

    assert_eq!(level.location_id, Some(844_681_632));
    assert_eq!(level.available, Some(0));
}

#[tokio::test]
async fn test_customer_tags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("customers/tags.json")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tags": ["vip", "wholesale"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tags = Customer::tags(&client_for(&server)).await.unwrap();

    assert_eq!(tags, vec!["vip".to_string(), "wholesale".to_string()]);
}

#[tokio::test]
async fn test_gift_card_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("gift_cards/search.json")))
        .and(query_param("query", "last_characters:0d0d"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"gift_cards": [
            {"id": 1_035_197_676, "balance": "100.00", "last_characters": "0d0d"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let params = GiftCardSearchParams {
        query: "last_characters:0d0d".to_string(),
        limit: Some(5),
        ..Default::default()
    };
    let cards = GiftCard::search(&client_for(&server), &params).await.unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].last_characters.as_deref(), Some("0d0d"));
    assert!(!cards.has_next_page());
}

#[tokio::test]
async fn test_theme_role_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("themes.json")))
        .and(query_param("role", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"themes": [
            {"id": 828_155_753, "name": "Comfort", "role": "main"}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ThemeListParams {
        role: Some(ThemeRole::Main),
        ..Default::default()
    };
    let themes = Theme::all(&client_for(&server), Some(params)).await.unwrap();

    assert_eq!(themes.len(), 1);
}

#[tokio::test]
async fn test_api_permissions_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("api_permissions/current.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    ApiPermissions::delete(&client_for(&server)).await.unwrap();
}

// ============================================================================
// Round trip
// ============================================================================

#[tokio::test]
async fn test_decoded_resource_saves_back_unchanged() {
    let server = MockServer::start().await;
    let body = json!({"webhook": {
        "id": 4_759_306,
        "address": "https://apple.com",
        "topic": "orders/create",
        "format": "json",
        "metafield_namespaces": ["google"],
        "api_version": "2026-07"
    }});
    Mock::given(method("GET"))
        .and(path(api_path("webhooks/4759306.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("webhooks/4759306.json")))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let webhook = Webhook::find(&client, 4_759_306, None).await.unwrap().into_inner();
    let saved = webhook.save(&client).await.unwrap();

    assert_eq!(saved, webhook);
}
