//! HTTP response types.
//!
//! [`HttpResponse`] holds the status, headers and decoded JSON body of a
//! response together with the Shopify-specific headers the client acts on.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::ResponseDecodingError;
use crate::clients::pagination::Pagination;

/// Call budget parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the number of requests currently in
/// the shop's leaky bucket and Y is the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// assert_eq!(limit.remaining(), 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests in the bucket.
    pub request_count: u32,
    /// The maximum number of requests the bucket holds.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the header value, returning `None` if it is not "X/Y".
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;

        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Returns the number of requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }

    /// Returns `true` if no request credits are left.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.request_count >= self.bucket_size
    }
}

/// A response from the Admin API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `{}` when the body was empty.
    pub body: serde_json::Value,
    /// Call budget (from `X-Shopify-Shop-Api-Call-Limit`).
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the call-limit and
    /// `Retry-After` headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_call_limit = first_header(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);

        let retry_request_after = first_header(&headers, "retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| Duration::try_from_secs_f64(*seconds).is_ok());

        Self {
            code,
            headers,
            body,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_lowercase())
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_header(&self.headers, "x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_header(&self.headers, "x-shopify-api-deprecated-reason")
    }

    /// Returns `true` if Shopify flagged the endpoint as deprecated.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason().is_some()
    }

    /// Returns the `Retry-After` delay as a [`Duration`].
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.retry_request_after
            .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
    }

    /// Extracts the next and previous page cursors from the `Link` header.
    ///
    /// A response without a `Link` header has empty pagination.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodingError::Pagination`] if the header is malformed.
    pub fn pagination(&self) -> Result<Pagination, ResponseDecodingError> {
        match self.headers.get("link") {
            Some(values) => Ok(Pagination::from_link_header(&values.join(","))?),
            None => Ok(Pagination::default()),
        }
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}
