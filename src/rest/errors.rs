//! Resource-specific error types for REST API operations.
//!
//! The executor already turns every non-2xx status into an
//! [`HttpError`]. This layer gives two of those statuses resource
//! semantics:
//!
//! - **404**: [`ResourceError::NotFound`]
//! - **422**: [`ResourceError::ValidationFailed`]
//! - **Anything else**: [`ResourceError::Http`] or [`ResourceError::Rest`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{RestResource, ResourceError};
//!
//! match Product::find(&client, 123, None).await {
//!     Ok(product) => println!("Found: {}", product.title),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{resource} with id {id} not found");
//!     }
//!     Err(ResourceError::ValidationFailed { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, HttpResponseError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ResourceError;
/// use std::collections::HashMap;
///
/// let error = ResourceError::NotFound {
///     resource: "Product",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Product with id 123 not found");
///
/// let mut errors = HashMap::new();
/// errors.insert("title".to_string(), vec!["can't be blank".to_string()]);
/// let error = ResourceError::ValidationFailed {
///     errors,
///     request_id: Some("abc-123".to_string()),
/// };
/// assert!(error.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Product", "Order").
        resource: &'static str,
        /// The ID that was requested, or `"unknown"` for list calls.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field names mapped to error messages. Errors that are not tied
        /// to a field are stored under `"base"`.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// No path matches the provided IDs and operation.
    ///
    /// Returned when a nested resource is used without its parent ID, or
    /// when the resource does not support the operation at all.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(RestError),
}

impl From<RestError> for ResourceError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Http(http) => Self::Http(http),
            other => Self::Rest(other),
        }
    }
}

impl ResourceError {
    /// Classifies a REST client error for the named resource.
    ///
    /// A 404 becomes [`NotFound`](Self::NotFound) carrying `id` (or
    /// `"unknown"`), a 422 becomes [`ValidationFailed`](Self::ValidationFailed).
    /// Everything else is passed through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::{HttpError, HttpResponseError, RestError};
    /// use shopify_rest::rest::ResourceError;
    /// use serde_json::json;
    ///
    /// let error = RestError::Http(HttpError::Response(HttpResponseError::from_response(
    ///     404,
    ///     &json!({"errors": "Not Found"}),
    ///     None,
    /// )));
    /// let error = ResourceError::from_rest_error(error, "Product", Some("123".to_string()));
    /// assert!(matches!(error, ResourceError::NotFound { resource: "Product", .. }));
    /// ```
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<String>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => {
                Self::from_response_error(response, resource, id)
            }
            other => other.into(),
        }
    }

    fn from_response_error(
        response: HttpResponseError,
        resource: &'static str,
        id: Option<String>,
    ) -> Self {
        match response.code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or_else(|| "unknown".to_string()),
            },
            422 => Self::ValidationFailed {
                errors: validation_errors(&response),
                request_id: response.error_reference,
            },
            _ => Self::Http(HttpError::Response(response)),
        }
    }

    /// Returns the HTTP status code, if this error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::ValidationFailed { .. } => Some(422),
            Self::PathResolutionFailed { .. } => None,
            Self::Http(e) => e.status(),
            Self::Rest(e) => e.status(),
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::ValidationFailed { request_id, .. } => request_id.as_deref(),
            Self::Http(e) => e.request_id(),
            _ => None,
        }
    }
}

/// Shopify sends 422 errors either keyed by field, as a bare array, or as
/// a single string. The latter two are filed under `"base"`.
fn validation_errors(response: &HttpResponseError) -> HashMap<String, Vec<String>> {
    if !response.field_errors.is_empty() {
        return response.field_errors.clone();
    }

    let mut errors = HashMap::new();
    if !response.errors.is_empty() {
        errors.insert("base".to_string(), response.errors.clone());
    } else if !response.message.is_empty() {
        errors.insert("base".to_string(), vec![response.message.clone()]);
    }
    errors
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
