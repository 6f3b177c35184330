//! Client configuration.
//!
//! The main types in this module are:
//!
//! - [`ShopifyConfig`]: everything a client needs to talk to one shop
//! - [`ShopifyConfigBuilder`]: a builder for [`ShopifyConfig`]
//! - [`ShopDomain`], [`HostUrl`]: validated addresses
//! - [`AccessToken`], [`ApiKey`], [`ApiPassword`]: validated credentials
//! - [`ApiVersion`]: the Admin API version to target
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiVersion, Credentials, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .credentials(Credentials::access_token(AccessToken::new("shpat_123").unwrap()))
//!     .api_version(ApiVersion::V2026_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, ApiPassword, HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::time::Duration;

use crate::auth::Credentials;
use crate::clients::RateLimitPolicy;
use crate::error::ConfigError;

/// Configuration for a client bound to one shop.
///
/// `ShopifyConfig` is `Clone`, `Send` and `Sync`.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    credentials: Credentials,
    api_version: ApiVersion,
    base_url: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    rate_limit_policy: RateLimitPolicy,
    timeout: Option<Duration>,
}

impl ShopifyConfig {
    /// Creates a new builder for constructing a `ShopifyConfig`.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the base URL override, if configured.
    ///
    /// When set, requests go to this URL instead of `https://{shop}` and
    /// carry a `Host: {shop}` header.
    #[must_use]
    pub const fn base_url(&self) -> Option<&HostUrl> {
        self.base_url.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    #[must_use]
    pub const fn rate_limit_policy(&self) -> &RateLimitPolicy {
        &self.rate_limit_policy
    }

    /// Returns the default per-attempt timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `credentials` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `base_url`: `None`
/// - `user_agent_prefix`: `None`
/// - `rate_limit_policy`: [`RateLimitPolicy::default`] (no retries, no throttling)
/// - `timeout`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_rest::{
///     ApiKey, ApiPassword, ApiVersion, Credentials, HostUrl, RateLimitPolicy, ShopDomain,
///     ShopifyConfig,
/// };
/// use std::time::Duration;
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store").unwrap())
///     .credentials(Credentials::basic(
///         ApiKey::new("key").unwrap(),
///         ApiPassword::new("password").unwrap(),
///     ))
///     .api_version(ApiVersion::V2026_04)
///     .base_url(HostUrl::new("https://proxy.example.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .rate_limit_policy(RateLimitPolicy::new().with_max_tries(3))
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.rate_limit_policy().max_tries(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    credentials: Option<Credentials>,
    api_version: Option<ApiVersion>,
    base_url: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    rate_limit_policy: Option<RateLimitPolicy>,
    timeout: Option<Duration>,
}

impl ShopifyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests through another origin, such as a proxy or a test server.
    #[must_use]
    pub fn base_url(mut self, url: HostUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit_policy = Some(policy);
        self
    }

    /// Sets the default per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ShopifyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `credentials` are not set, and
    /// [`ConfigError::InvalidRateLimitPolicy`] if the policy is invalid.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        let rate_limit_policy = self.rate_limit_policy.unwrap_or_default();
        rate_limit_policy.validate()?;

        Ok(ShopifyConfig {
            shop,
            credentials,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
            rate_limit_policy,
            timeout: self.timeout,
        })
    }
}
