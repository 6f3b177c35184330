//! Integration tests for client configuration.
//!
//! These tests verify that a configuration built from validated newtypes
//! produces a client pointed at the right shop and API version.

use std::time::Duration;

use tokio_test::{assert_err, assert_ok};

use shopify_rest::{
    AccessToken, ApiKey, ApiPassword, ApiVersion, ConfigError, Credentials, HostUrl,
    RateLimitPolicy, RestClient, ShopDomain, ShopifyConfig,
};

#[test]
fn test_full_workflow_create_newtypes_build_config_build_client() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("My-Store.myshopify.com").unwrap())
        .credentials(Credentials::access_token(AccessToken::new("shpat_abc").unwrap()))
        .api_version(ApiVersion::V2026_04)
        .user_agent_prefix("TestApp/1.0")
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
    assert_eq!(config.shop().shop_name(), "my-store");
    assert_eq!(config.api_version(), &ApiVersion::V2026_04);
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

    let client = RestClient::new(&config).unwrap();
    assert_eq!(client.api_version(), &ApiVersion::V2026_04);
    assert_eq!(client.http_client().base_uri(), "https://my-store.myshopify.com");
    assert_eq!(client.http_client().base_path(), "/admin/api/2026-04");

    let user_agent = &client.http_client().default_headers()["User-Agent"];
    assert!(user_agent.starts_with("TestApp/1.0 | Shopify REST Client v"));
}

#[test]
fn test_private_app_credentials() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .credentials(Credentials::basic(
            ApiKey::new("api-key").unwrap(),
            ApiPassword::new("api-password").unwrap(),
        ))
        .build()
        .unwrap();

    assert!(!config.credentials().is_access_token());
    assert_eq!(config.api_version(), &ApiVersion::latest());

    // Secrets never appear in debug output.
    let debug = format!("{config:?}");
    assert!(!debug.contains("api-password"));
}

#[test]
fn test_base_url_override() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .credentials(Credentials::access_token(AccessToken::new("shpat_abc").unwrap()))
        .base_url(HostUrl::new("http://localhost:3000").unwrap())
        .build()
        .unwrap();

    let client = RestClient::new(&config).unwrap();
    assert_eq!(client.http_client().base_uri(), "http://localhost:3000");
    assert_eq!(
        client.http_client().default_headers().get("Host"),
        Some(&"my-store.myshopify.com".to_string())
    );
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(
        AccessToken::new("   "),
        Err(ConfigError::EmptyAccessToken)
    ));
    assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    assert!(matches!(
        ShopDomain::new("not a shop"),
        Err(ConfigError::InvalidShopDomain { .. })
    ));
    assert!(matches!(
        ShopDomain::new("shop.example.com"),
        Err(ConfigError::InvalidShopDomain { .. })
    ));
    assert!(matches!(
        HostUrl::new("localhost:3000"),
        Err(ConfigError::InvalidHostUrl { .. })
    ));
}

#[test]
fn test_builder_requires_shop_and_credentials() {
    let missing_shop = ShopifyConfig::builder()
        .credentials(Credentials::access_token(AccessToken::new("shpat_abc").unwrap()))
        .build();
    assert!(matches!(
        missing_shop,
        Err(ConfigError::MissingRequiredField { field: "shop" })
    ));

    let missing_credentials = ShopifyConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .build();
    assert!(matches!(
        missing_credentials,
        Err(ConfigError::MissingRequiredField { field: "credentials" })
    ));
}

#[test]
fn test_builder_rejects_invalid_rate_limit_policy() {
    let result = ShopifyConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .credentials(Credentials::access_token(AccessToken::new("shpat_abc").unwrap()))
        .rate_limit_policy(RateLimitPolicy::new().with_max_tries(0))
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::InvalidRateLimitPolicy { .. })
    ));
}

// =============================================================================
// Versions
// =============================================================================

#[test]
fn test_version_parsing_and_ordering() {
    let version: ApiVersion = assert_ok!("2026-01".parse());
    assert_eq!(version, ApiVersion::V2026_01);
    assert!(ApiVersion::V2025_10 < version);
    assert!(version < ApiVersion::Unstable);
    assert_eq!("unstable".parse::<ApiVersion>().unwrap(), ApiVersion::Unstable);

    assert_err!("2026-02".parse::<ApiVersion>());
    assert_err!("latest".parse::<ApiVersion>());
}

#[test]
fn test_supported_window() {
    let supported = ApiVersion::supported_versions();
    assert!(supported.contains(&ApiVersion::latest()));
    assert!(supported.iter().all(|v| !v.is_deprecated()));

    assert!(ApiVersion::V2025_07.is_deprecated());
    assert!(!ApiVersion::Unstable.is_deprecated());
}

#[test]
fn test_deprecated_version_still_builds_a_client() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("my-store").unwrap())
        .credentials(Credentials::access_token(AccessToken::new("shpat_abc").unwrap()))
        .build()
        .unwrap();

    let client = RestClient::with_version(&config, ApiVersion::V2025_01).unwrap();
    assert_eq!(client.http_client().base_path(), "/admin/api/2025-01");
}
