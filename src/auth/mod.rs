//! Request authentication.
//!
//! Shopify accepts two kinds of credentials on the Admin REST API:
//!
//! - **Access tokens** (custom and public apps), sent in the
//!   `X-Shopify-Access-Token` header.
//! - **API key / password pairs** (legacy private apps), sent with HTTP
//!   basic authentication.
//!
//! Credentials are fixed when the client is built; there is no token
//! refresh or OAuth handshake in this crate.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AccessToken, ApiKey, ApiPassword, Credentials};
//!
//! let token = Credentials::access_token(AccessToken::new("shpat_123").unwrap());
//! assert!(token.is_access_token());
//!
//! let basic = Credentials::basic(
//!     ApiKey::new("key").unwrap(),
//!     ApiPassword::new("password").unwrap(),
//! );
//! assert!(!basic.is_access_token());
//! ```

use crate::config::{AccessToken, ApiKey, ApiPassword};

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Credentials attached to every request made by a client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// An Admin API access token.
    AccessToken(AccessToken),
    /// A private app API key and password.
    Basic {
        /// The private app API key.
        api_key: ApiKey,
        /// The private app password.
        password: ApiPassword,
    },
}

impl Credentials {
    /// Creates access token credentials.
    #[must_use]
    pub const fn access_token(token: AccessToken) -> Self {
        Self::AccessToken(token)
    }

    /// Creates basic authentication credentials for a private app.
    #[must_use]
    pub const fn basic(api_key: ApiKey, password: ApiPassword) -> Self {
        Self::Basic { api_key, password }
    }

    /// Returns `true` if these credentials use an access token.
    #[must_use]
    pub const fn is_access_token(&self) -> bool {
        matches!(self, Self::AccessToken(_))
    }

    /// Attaches these credentials to an outgoing request.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::AccessToken(token) => builder.header(ACCESS_TOKEN_HEADER, token.as_ref()),
            Self::Basic { api_key, password } => {
                builder.basic_auth(api_key.as_ref(), Some(password.as_ref()))
            }
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
