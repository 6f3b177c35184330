//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so the rest of the
//! crate can rely on a [`ShopDomain`] always being a `*.myshopify.com` host
//! and a credential never being an empty string.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Admin API access token.
///
/// The `Debug` implementation masks the token so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated private app API key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated private app password, masked in debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiPassword(String);

impl ApiPassword {
    /// Creates a new validated API password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyApiPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for ApiPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiPassword(*****)")
    }
}

/// A validated Shopify shop domain.
///
/// Short names are normalized to the full `shop-name.myshopify.com` form.
///
/// # Example
///
/// ```rust
/// use shopify_rest::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
///
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-store.myshopify.com""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let shop_name = match domain.strip_suffix(Self::SUFFIX) {
            Some(name) => name.to_string(),
            None if domain.contains('.') => {
                return Err(ConfigError::InvalidShopDomain { domain });
            }
            None => domain.clone(),
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self {
            full_domain: format!("{shop_name}{}", Self::SUFFIX),
            shop_name_end: shop_name.len(),
        })
    }

    /// Returns the shop name portion of the domain.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL that replaces `https://{shop}` as the request origin.
///
/// Used to route traffic through a proxy or at a local test server. Only
/// `http` and `https` URLs with a host are accepted.
///
/// # Example
///
/// ```rust
/// use shopify_rest::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.base_uri(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(url::Url);

impl HostUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL cannot be parsed,
    /// is not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let invalid = || ConfigError::InvalidHostUrl { url: raw.clone() };

        let parsed = url::Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL without a trailing slash, ready to prefix request paths.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_and_blank() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_secrets_are_masked_in_debug() {
        let token = AccessToken::new("shpat_secret").unwrap();
        let password = ApiPassword::new("hunter2").unwrap();

        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
        assert_eq!(format!("{password:?}"), "ApiPassword(*****)");
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(
            ApiPassword::new(""),
            Err(ConfigError::EmptyApiPassword)
        ));
    }

    #[test]
    fn test_shop_domain_normalizes_short_name() {
        let domain = ShopDomain::new("  Fooshop ").unwrap();
        assert_eq!(domain.as_ref(), "fooshop.myshopify.com");
        assert_eq!(domain.shop_name(), "fooshop");
        assert_eq!(domain.to_string(), "fooshop.myshopify.com");
    }

    #[test]
    fn test_shop_domain_accepts_full_domain() {
        let domain = ShopDomain::new("my-store.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_values() {
        for bad in ["", "-shop", "shop-", "shop.example.com", "sh op", ".myshopify.com"] {
            assert!(
                matches!(ShopDomain::new(bad), Err(ConfigError::InvalidShopDomain { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_shop_domain_serde_round_trip() {
        let domain = ShopDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        let back: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, domain);

        let err = serde_json::from_str::<ShopDomain>(r#""not a shop!""#);
        assert!(err.is_err());
    }

    #[test]
    fn test_host_url_parses_and_trims() {
        let url = HostUrl::new("https://proxy.example.com/").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("proxy.example.com"));
        assert_eq!(url.base_uri(), "https://proxy.example.com");
    }

    #[test]
    fn test_host_url_rejects_invalid_values() {
        for bad in ["not a url", "ftp://example.com", "example.com", "mailto:a@b.c"] {
            assert!(
                matches!(HostUrl::new(bad), Err(ConfigError::InvalidHostUrl { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
