//! # Shopify Admin REST client
//!
//! An async client for the Shopify Admin REST API with typed resource
//! bindings.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`]
//! - Access-token and private-app Basic authentication via [`Credentials`]
//! - A request executor ([`HttpClient`]) that classifies Shopify error
//!   bodies, tracks the `X-Shopify-Shop-Api-Call-Limit` header and applies
//!   a [`RateLimitPolicy`]
//! - Strict `Link` header pagination ([`Pagination`], [`ListOptions`])
//! - Generic resource accessors ([`rest::RestResource`]) and bindings for
//!   products, customers, orders and more in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, Credentials, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .credentials(Credentials::access_token(AccessToken::new("shpat_123").unwrap()))
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use shopify_rest::{ListOptions, RestClient};
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::Product;
//!
//! let client = RestClient::new(&config)?;
//!
//! // Raw request
//! let response = client.get("shop", None).await?;
//! println!("{}", response.body["shop"]["name"]);
//!
//! // Typed resources, walking every page
//! let mut options = Some(ListOptions { limit: Some(50), ..Default::default() });
//! while let Some(current) = options {
//!     let page = Product::all(&client, Some(current.into())).await?;
//!     for product in page.iter() {
//!         println!("{:?}", product.title);
//!     }
//!     options = page.next_page_options().cloned();
//! }
//! ```
//!
//! ## Rate Limits
//!
//! By default a `429 Too Many Requests` is returned to the caller as
//! [`HttpError::RateLimited`]. Opt into retries with
//! [`RateLimitPolicy::with_max_tries`], or into throttling ahead of the
//! limit with [`RateLimitPolicy::with_throttle`], and pass the policy to
//! [`ShopifyConfigBuilder::rate_limit_policy`].
//!
//! ## Thread Safety
//!
//! All public types are `Send + Sync`. Clients are cheap to clone and
//! clones share one connection pool and one call-limit tracker.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::Credentials;
pub use config::{
    AccessToken, ApiKey, ApiPassword, ApiVersion, HostUrl, ShopDomain, ShopifyConfig,
    ShopifyConfigBuilder,
};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, ListOptions,
    MaxHttpRetriesExceededError, Pagination, PaginationError, RateLimitError, RateLimitPolicy,
    ResponseDecodingError, RestClient, RestError,
};
