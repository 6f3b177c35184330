//! HTTP-specific error types.
//!
//! Every failure of [`HttpClient::request`](crate::clients::HttpClient::request)
//! is one of the variants of [`HttpError`]:
//!
//! - [`HttpResponseError`]: a non-2xx response, with its decoded error body
//! - [`RateLimitError`]: a 429 response that was not retried
//! - [`MaxHttpRetriesExceededError`]: retry attempts exhausted on 429s
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`ResponseDecodingError`]: a body or pagination header that could not be decoded
//! - transport failures and cancellation
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::RateLimited(e)) => println!("Retry after {:?}", e.retry_after),
//!     Err(e) if e.is_timeout() => println!("Timed out"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::clients::pagination::PaginationError;

/// Error returned when a request receives a non-successful response.
///
/// The error body is decoded from any of the shapes Shopify uses:
///
/// - `{"errors": "Not Found"}`
/// - `{"errors": ["first", "second"]}`
/// - `{"errors": {"title": ["can't be blank"]}}`
/// - `{"error": "invalid_request", "error_description": "..."}`
///
/// When the body carries no usable message, the status line is used.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::from_response(
///     422,
///     &json!({"errors": {"title": ["can't be blank"]}}),
///     Some("abc-123".to_string()),
/// );
///
/// assert_eq!(error.message, "title: can't be blank");
/// assert_eq!(error.field_errors["title"], vec!["can't be blank"]);
/// assert_eq!(error.error_reference.as_deref(), Some("abc-123"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable summary of the error.
    pub message: String,
    /// Individual error messages, sorted.
    pub errors: Vec<String>,
    /// Validation messages keyed by field name.
    pub field_errors: HashMap<String, Vec<String>>,
    /// The `X-Request-Id` of the failed request, for support tickets.
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Builds an error from a status code and a decoded body.
    ///
    /// Pass [`Value::Null`] when the body was empty or not JSON.
    #[must_use]
    pub fn from_response(code: u16, body: &Value, error_reference: Option<String>) -> Self {
        let mut message = String::new();
        let mut errors = Vec::new();
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();

        if let Some(error) = body.get("error").and_then(Value::as_str) {
            message = error.to_string();
            if let Some(description) = body.get("error_description").and_then(Value::as_str) {
                message = format!("{message}: {description}");
            }
        }

        match body.get("errors") {
            Some(Value::String(text)) => message.clone_from(text),
            Some(Value::Array(items)) => {
                errors.extend(items.iter().map(value_to_message));
            }
            Some(Value::Object(fields)) => {
                for (field, messages) in fields {
                    let messages: Vec<String> = match messages {
                        Value::Array(items) => items.iter().map(value_to_message).collect(),
                        other => vec![value_to_message(other)],
                    };
                    errors.extend(messages.iter().map(|m| format!("{field}: {m}")));
                    field_errors.insert(field.clone(), messages);
                }
            }
            _ => {}
        }
        errors.sort();

        // 406 bodies are HTML, not an error envelope.
        if code == 406 {
            message = status_line(code);
        } else if message.is_empty() {
            message = if errors.is_empty() {
                status_line(code)
            } else {
                errors.join(", ")
            };
        }

        Self {
            code,
            message,
            errors,
            field_errors,
            error_reference,
        }
    }
}

fn value_to_message(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn status_line(code: u16) -> String {
    let reason = reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason());
    match reason {
        Some(reason) => format!("{code} {reason}"),
        None => code.to_string(),
    }
}

/// Error returned for a 429 response that was not retried.
///
/// This is the only error the client retries on its own, and only when the
/// rate limit policy allows more than one try.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("rate limited: {response}")]
pub struct RateLimitError {
    /// How long Shopify asked the client to wait, from `Retry-After`.
    pub retry_after: Option<Duration>,
    /// The decoded 429 response.
    pub response: HttpResponseError,
}

/// Error returned when retry attempts have been exhausted on 429 responses.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::MaxHttpRetriesExceededError;
///
/// let error = MaxHttpRetriesExceededError {
///     code: 429,
///     tries: 3,
///     message: "Exceeded 2 calls per second for api client.".to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().starts_with("Exceeded maximum retry count of 3."));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Message of the last response.
    pub message: String,
    /// The `X-Request-Id` of the last response.
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request asked for zero tries.
    #[error("A request must be tried at least once.")]
    InvalidTries,
}

/// Error returned when a successful response cannot be decoded.
#[derive(Debug, Error)]
pub enum ResponseDecodingError {
    /// The body was not valid JSON, or did not match the expected shape.
    #[error("could not decode response body (status {code}): {source}")]
    Body {
        /// The HTTP status code.
        code: u16,
        /// The raw body text.
        body: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The body lacked the expected envelope key.
    #[error("response (status {code}) is missing the '{key}' key")]
    MissingKey {
        /// The HTTP status code.
        code: u16,
        /// The key that was expected.
        key: String,
    },

    /// The `Link` header could not be parsed.
    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::HttpError;
///
/// if let Err(err) = client.request(request).await {
///     if err.is_retryable() {
///         // back off and try again later
///     }
///     eprintln!("status={:?} request_id={:?}: {err}", err.status(), err.request_id());
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response other than 429.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 429 response that was not retried.
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A successful response could not be decoded.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request was cancelled through its cancellation token.
    #[error("request cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::RateLimited(e) => Some(e.response.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Decoding(ResponseDecodingError::Body { code, .. })
            | Self::Decoding(ResponseDecodingError::MissingKey { code, .. }) => Some(*code),
            Self::Network(e) => e.status().map(|status| status.as_u16()),
            Self::Decoding(ResponseDecodingError::Pagination(_))
            | Self::InvalidRequest(_)
            | Self::Cancelled => None,
        }
    }

    /// Returns `true` if retrying later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited(_) | Self::MaxRetries(_))
    }

    /// Returns `true` if the request timed out in the transport.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// Returns the `X-Request-Id` of the failed response, if known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            Self::RateLimited(e) => e.response.error_reference.as_deref(),
            Self::MaxRetries(e) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<HttpResponseError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_errors_become_message() {
        let error = HttpResponseError::from_response(404, &json!({"errors": "Not Found"}), None);
        assert_eq!(error.code, 404);
        assert_eq!(error.message, "Not Found");
        assert!(error.errors.is_empty());
        assert_eq!(error.to_string(), "Not Found");
    }

    #[test]
    fn test_array_errors_are_sorted_and_joined() {
        let error = HttpResponseError::from_response(
            400,
            &json!({"errors": ["second problem", "first problem"]}),
            None,
        );
        assert_eq!(error.errors, vec!["first problem", "second problem"]);
        assert_eq!(error.message, "first problem, second problem");
    }

    #[test]
    fn test_field_errors_are_keyed_by_field() {
        let error = HttpResponseError::from_response(
            422,
            &json!({"errors": {
                "title": ["can't be blank"],
                "handle": ["has already been taken", "is too long"],
                "price": "must be positive"
            }}),
            None,
        );

        assert_eq!(error.field_errors["title"], vec!["can't be blank"]);
        assert_eq!(error.field_errors["price"], vec!["must be positive"]);
        assert_eq!(
            error.errors,
            vec![
                "handle: has already been taken",
                "handle: is too long",
                "price: must be positive",
                "title: can't be blank",
            ]
        );
        assert!(error.message.starts_with("handle: has already been taken, "));
    }

    #[test]
    fn test_oauth_style_error_includes_description() {
        let error = HttpResponseError::from_response(
            401,
            &json!({"error": "invalid_token", "error_description": "The token has expired"}),
            None,
        );
        assert_eq!(error.message, "invalid_token: The token has expired");
    }

    #[test]
    fn test_malformed_body_falls_back_to_status_line() {
        let error = HttpResponseError::from_response(502, &Value::Null, None);
        assert_eq!(error.message, "502 Bad Gateway");

        let error = HttpResponseError::from_response(404, &json!({"unexpected": true}), None);
        assert_eq!(error.message, "404 Not Found");

        let error = HttpResponseError::from_response(599, &Value::Null, None);
        assert_eq!(error.message, "599");
    }

    #[test]
    fn test_not_acceptable_uses_status_text() {
        let error = HttpResponseError::from_response(406, &json!({"errors": "ignored"}), None);
        assert_eq!(error.message, "406 Not Acceptable");
    }

    #[test]
    fn test_max_retries_error_message() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "Exceeded 2 calls per second for api client.".to_string(),
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            "Exceeded maximum retry count of 3. Last message: Exceeded 2 calls per second for api client."
        );
    }

    #[test]
    fn test_invalid_request_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "POST".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use POST without specifying data.");
        assert_eq!(
            InvalidHttpRequestError::InvalidTries.to_string(),
            "A request must be tried at least once."
        );
    }

    #[test]
    fn test_http_error_helpers() {
        let response = HttpResponseError::from_response(
            429,
            &json!({"errors": "Exceeded 2 calls per second for api client. Reduce request rates to resume uninterrupted service."}),
            Some("req-1".to_string()),
        );
        let rate_limited = HttpError::from(RateLimitError {
            retry_after: Some(Duration::from_secs(2)),
            response,
        });

        assert_eq!(rate_limited.status(), Some(429));
        assert!(rate_limited.is_retryable());
        assert!(!rate_limited.is_timeout());
        assert_eq!(rate_limited.request_id(), Some("req-1"));

        let not_found = HttpError::from(HttpResponseError::from_response(404, &Value::Null, None));
        assert_eq!(not_found.status(), Some(404));
        assert!(!not_found.is_retryable());

        assert_eq!(HttpError::Cancelled.status(), None);
        assert_eq!(HttpError::Cancelled.to_string(), "request cancelled");
    }

    #[test]
    fn test_pagination_error_is_transparent() {
        let error = HttpError::from(ResponseDecodingError::from(PaginationError::MissingPageInfo));
        assert_eq!(error.to_string(), "page_info is missing");
        assert_eq!(error.status(), None);
    }
}
