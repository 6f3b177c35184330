//! Configuration error types.
//!
//! Every constructor in [`crate::config`] and [`crate::auth`] validates its
//! input and returns `Result<T, ConfigError>`, so a misconfigured client is
//! rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Shopify Admin API access token.")]
    EmptyAccessToken,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API password cannot be empty.
    #[error("API password cannot be empty. Please provide the private app password.")]
    EmptyApiPassword,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Rate limit policy is invalid.
    #[error("Invalid rate limit policy: {reason}")]
    InvalidRateLimitPolicy {
        /// Why the policy was rejected.
        reason: String,
    },
}
