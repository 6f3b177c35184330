//! Response wrapper for REST resource operations.
//!
//! [`ResourceResponse<T>`] carries decoded resource data together with the
//! page cursors, call limit and request ID of the response it came from.
//! It derefs to `T`, so a list response behaves like a `Vec`:
//!
//! ```rust,ignore
//! let response = Customer::all(&client, None).await?;
//!
//! for customer in response.iter() {
//!     println!("{:?}", customer.email);
//! }
//!
//! if let Some(next) = response.next_page_options() {
//!     let page_two = Customer::all(&client, Some(next.clone())).await?;
//! }
//!
//! let customers: Vec<Customer> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::{
    ApiCallLimit, HttpError, HttpResponse, ListOptions, Pagination, ResponseDecodingError,
};
use crate::rest::ResourceError;

/// A response from a REST resource operation.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ResourceResponse;
/// use shopify_rest::clients::{ApiCallLimit, ListOptions, Pagination};
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     Pagination {
///         next_page_options: Some(ListOptions::cursor("eyJsYXN0X2lkIjo0fQ", Some(3))),
///         previous_page_options: None,
///     },
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert!(response.has_next_page());
/// assert!(!response.has_previous_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Pagination,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Pagination,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the page cursors parsed from the `Link` header.
    ///
    /// Empty for single-resource responses and for the last page of a list.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.pagination.has_previous_page()
    }

    /// Options that fetch the next page when passed back to the same list call.
    #[must_use]
    pub const fn next_page_options(&self) -> Option<&ListOptions> {
        self.pagination.next_page_options.as_ref()
    }

    /// Options that fetch the previous page.
    #[must_use]
    pub const fn previous_page_options(&self) -> Option<&ListOptions> {
        self.pagination.previous_page_options.as_ref()
    }

    /// Returns the call limit reported with this response, if any.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the value under `key` in the response body (the envelope)
    /// and collects the response metadata.
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the body has no `key`, if the value does
    /// not decode into `T`, or if the `Link` header is malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpResponse;
    /// use shopify_rest::rest::ResourceResponse;
    /// use serde_json::json;
    /// use std::collections::HashMap;
    ///
    /// let http = HttpResponse::new(200, HashMap::new(), json!({"ids": [1, 2]}));
    /// let response: ResourceResponse<Vec<u64>> =
    ///     ResourceResponse::from_http_response(http, "ids").unwrap();
    /// assert_eq!(*response, vec![1, 2]);
    /// ```
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let pagination = response.pagination().map_err(HttpError::from)?;
        let request_id = response.request_id().map(ToString::to_string);
        let HttpResponse {
            code,
            mut body,
            api_call_limit,
            ..
        } = response;

        let value = body.get_mut(key).map(Value::take).ok_or_else(|| {
            HttpError::from(ResponseDecodingError::MissingKey {
                code,
                key: key.to_string(),
            })
        })?;

        let data = T::deserialize(&value).map_err(|source| {
            HttpError::from(ResponseDecodingError::Body {
                code,
                body: value.to_string(),
                source,
            })
        })?;

        Ok(Self {
            data,
            pagination,
            rate_limit: api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
