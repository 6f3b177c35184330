//! HTTP client types for Shopify Admin API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the async request executor
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a parsed response from the API
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Pagination`] and [`ListOptions`]: cursors from the `Link` header
//! - [`RateLimitPolicy`] and [`RateLimiter`]: call-limit handling
//! - [`rest::RestClient`]: versioned, typed access to REST endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("/admin/api/2026-07", &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products.json")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! let pagination = response.pagination()?;
//! ```
//!
//! # Retry Behavior
//!
//! Only `429 Too Many Requests` is ever retried:
//!
//! - The wait is the `Retry-After` header value, or the policy's `retry_wait`.
//! - With one try (the default) the 429 surfaces as [`HttpError::RateLimited`].
//! - With more tries, exhausting them yields [`HttpError::MaxRetries`].
//! - Every other status returns immediately.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod query;
mod rate_limit;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    RateLimitError, ResponseDecodingError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse};
pub use pagination::{ListOptions, Pagination, PaginationError};
pub use query::to_query;
pub use rate_limit::{RateLimitPolicy, RateLimiter};

pub use rest::{RestClient, RestError};
