//! HTTP request descriptors.
//!
//! An [`HttpRequest`] is built once per call with [`HttpRequest::builder`]
//! and handed to [`HttpClient::request`](crate::clients::HttpClient::request).
//! Request bodies are always JSON.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource or collection.
    Get,
    /// Create a resource or trigger an action.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns `true` for methods that must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request to be sent to the Admin API.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "products.json")
///     .query_param("limit", "50")
///     .build()
///     .unwrap();
///
/// let post = HttpRequest::builder(HttpMethod::Post, "products.json")
///     .body(json!({"product": {"title": "New Product"}}))
///     .tries(3)
///     .build()
///     .unwrap();
/// # let _ = (get, post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the client's base path.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Attempts for this request. `None` uses the client's rate limit policy.
    pub tries: Option<u32>,
    /// Aborts the request (and any pending retry) when cancelled.
    pub cancellation: Option<CancellationToken>,
    /// Per-attempt timeout, overriding the client default.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if a POST or PUT has no body, or
    /// if `tries` is zero.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.tries == Some(0) {
            return Err(InvalidHttpRequestError::InvalidTries);
        }

        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                query: None,
                extra_headers: None,
                tries: None,
                cancellation: None,
                timeout: None,
            },
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.request.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request
            .extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts, overriding the client's policy.
    ///
    /// Only rate-limited (429) responses are retried.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = Some(tries);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.request.cancellation = Some(token);
        self
    }

    /// Sets a per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_and_conversion() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "products.json");
        assert!(request.body.is_none());
        assert!(request.tries.is_none());
        assert!(request.cancellation.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = HttpRequest::builder(HttpMethod::Post, "products.json")
            .body(json!({"product": {"title": "Test"}}))
            .build()
            .unwrap();

        assert_eq!(request.body, Some(json!({"product": {"title": "Test"}})));
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let post = HttpRequest::builder(HttpMethod::Post, "products.json").build();
        assert!(matches!(
            post,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "POST"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, "products/1.json").build();
        assert!(matches!(
            put,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "PUT"
        ));
    }

    #[test]
    fn test_delete_does_not_require_body() {
        assert!(HttpRequest::builder(HttpMethod::Delete, "products/1.json")
            .build()
            .is_ok());
    }

    #[test]
    fn test_zero_tries_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "products.json")
            .tries(0)
            .build();
        assert!(matches!(result, Err(InvalidHttpRequestError::InvalidTries)));
    }

    #[test]
    fn test_builder_with_query_headers_and_options() {
        let token = CancellationToken::new();
        let request = HttpRequest::builder(HttpMethod::Get, "products.json")
            .query_param("limit", "50")
            .query_param("page_info", "abc123")
            .header("X-Custom-Header", "custom-value")
            .tries(3)
            .timeout(Duration::from_secs(5))
            .cancellation_token(token.clone())
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("limit"), Some(&"50".to_string()));
        assert_eq!(query.get("page_info"), Some(&"abc123".to_string()));
        assert_eq!(
            request.extra_headers.unwrap().get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
        assert_eq!(request.tries, Some(3));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));

        token.cancel();
        assert!(request.cancellation.unwrap().is_cancelled());
    }
}
