//! REST-specific error types.
//!
//! - [`RestError::InvalidPath`]: a path that is empty after normalization
//! - [`RestError::InvalidBody`]: query options or a body that could not be serialized
//! - [`RestError::Http`]: wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::rest::RestError;
//!
//! match client.get("products", None).await {
//!     Ok(response) => println!("Products: {}", response.body),
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::InvalidBody { message }) => println!("Bad body: {message}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// Query options or a request body could not be serialized.
    #[error("Invalid request body: {message}")]
    InvalidBody {
        /// Why serialization failed.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, if this error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestError>();
};
