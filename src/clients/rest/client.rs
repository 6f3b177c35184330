//! REST client implementation for the Shopify Admin API.
//!
//! [`RestClient`] wraps [`HttpClient`] with the versioned base path,
//! path normalization, and typed helpers that decode JSON bodies into
//! caller-supplied types.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::clients::rest::RestError;
use crate::clients::{
    to_query, ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    Pagination, ResponseDecodingError,
};
use crate::config::{ApiVersion, ShopifyConfig};

#[derive(Clone, Debug, Default)]
struct RequestOptions {
    tries: Option<u32>,
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

/// REST API client for the Shopify Admin API.
///
/// Provides raw methods (`get`, `post`, `put`, `delete`) returning
/// [`HttpResponse`], and typed methods (`get_json`, `post_json`,
/// `put_json`, `delete_with_query`, `count`, `list_with_pagination`) that
/// encode query options from any `Serialize` struct and decode responses.
///
/// Cloning is cheap; clones share the connection pool and call-limit
/// tracking. The `with_*` methods return such a clone with per-request
/// options applied to every call made through it.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::{RestClient, ListOptions};
///
/// let client = RestClient::new(&config)?;
///
/// // Raw GET
/// let response = client.get("products", None).await?;
///
/// // Typed GET with pagination
/// let options = ListOptions { limit: Some(50), ..Default::default() };
/// let (body, pagination): (serde_json::Value, _) =
///     client.list_with_pagination("products", Some(&options)).await?;
///
/// if let Some(next) = pagination.next_page_options {
///     let (page_two, _): (serde_json::Value, _) =
///         client.list_with_pagination("products", Some(&next)).await?;
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    options: RequestOptions,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client using the configured API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        Self::create_client(config, *config.api_version())
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use shopify_rest::{RestClient, ApiVersion};
    ///
    /// let client = RestClient::with_version(&config, ApiVersion::V2026_04)?;
    /// ```
    pub fn with_version(config: &ShopifyConfig, version: ApiVersion) -> Result<Self, RestError> {
        let config_version = config.api_version();
        if &version == config_version {
            tracing::debug!(
                "Rest client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "Rest client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::create_client(config, version)
    }

    fn create_client(config: &ShopifyConfig, api_version: ApiVersion) -> Result<Self, RestError> {
        if api_version.is_deprecated() {
            tracing::warn!(
                "API version {} is outside Shopify's support window (oldest supported: {})",
                api_version,
                ApiVersion::minimum_supported()
            );
        }

        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::new(base_path, config)?;

        Ok(Self {
            http_client,
            api_version,
            options: RequestOptions::default(),
        })
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the last call limit reported by Shopify, if any.
    #[must_use]
    pub fn rate_limit(&self) -> Option<ApiCallLimit> {
        self.http_client.rate_limit()
    }

    /// Returns a clone whose requests are tried up to `tries` times on 429.
    #[must_use]
    pub fn with_tries(&self, tries: u32) -> Self {
        let mut client = self.clone();
        client.options.tries = Some(tries);
        client
    }

    /// Returns a clone whose requests time out after `timeout`.
    #[must_use]
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let mut client = self.clone();
        client.options.timeout = Some(timeout);
        client
    }

    /// Returns a clone whose requests are aborted when `token` is cancelled.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let token = CancellationToken::new();
    /// let scoped = client.with_cancellation_token(token.clone());
    ///
    /// tokio::spawn(async move { token.cancel() });
    /// let result = scoped.get("products", None).await;
    /// ```
    #[must_use]
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.options.cancellation = Some(token);
        client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Post, path, Some(body), query).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Put, path, Some(body), query).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Delete, path, None, query).await
    }

    /// Sends a GET request and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidBody`] if `query` cannot be encoded, and
    /// [`RestError::Http`] for HTTP errors or a body that does not decode
    /// into `T`.
    pub async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get(path, encode_query(query)?).await?;
        decode(response)
    }

    /// Sends a GET request to a list endpoint, decoding the body into `T`
    /// and extracting the page cursors from the `Link` header.
    ///
    /// # Errors
    ///
    /// As [`get_json`](Self::get_json), plus a decoding error if the `Link`
    /// header is malformed.
    pub async fn list_with_pagination<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<(T, Pagination), RestError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get(path, encode_query(query)?).await?;
        let pagination = response.pagination().map_err(HttpError::from)?;
        Ok((decode(response)?, pagination))
    }

    /// Sends a GET request to a count endpoint and returns `count`.
    ///
    /// # Errors
    ///
    /// As [`get_json`](Self::get_json), plus a decoding error if the body
    /// has no numeric `count`.
    pub async fn count<Q>(&self, path: &str, query: Option<&Q>) -> Result<u64, RestError>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.get(path, encode_query(query)?).await?;
        response
            .body
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                HttpError::from(ResponseDecodingError::MissingKey {
                    code: response.code,
                    key: "count".to_string(),
                })
                .into()
            })
    }

    /// Sends a POST request with `body` serialized as JSON and decodes the
    /// response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidBody`] if `body` cannot be serialized,
    /// and [`RestError::Http`] for HTTP or decoding errors.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.post(path, encode_body(body)?, None).await?;
        decode(response)
    }

    /// Sends a PUT request with `body` serialized as JSON and decodes the
    /// response into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidBody`] if `body` cannot be serialized,
    /// and [`RestError::Http`] for HTTP or decoding errors.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.put(path, encode_body(body)?, None).await?;
        decode(response)
    }

    /// Sends a DELETE request. An empty response body is a success.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidBody`] if `query` cannot be encoded, and
    /// [`RestError::Http`] for HTTP errors.
    pub async fn delete_with_query<Q>(&self, path: &str, query: Option<&Q>) -> Result<(), RestError>
    where
        Q: Serialize + ?Sized,
    {
        self.delete(path, encode_query(query)?).await?;
        Ok(())
    }

    /// Sends a request with an explicit method.
    ///
    /// The raw methods above all delegate here. A `POST` or `PUT` without
    /// a body fails request validation.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params);
        }
        if let Some(tries) = self.options.tries {
            builder = builder.tries(tries);
        }
        if let Some(timeout) = self.options.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(token) = &self.options.cancellation {
            builder = builder.cancellation_token(token.clone());
        }

        let request = builder.build().map_err(HttpError::from)?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

fn encode_query<Q: Serialize + ?Sized>(
    query: Option<&Q>,
) -> Result<Option<HashMap<String, String>>, RestError> {
    query
        .map(to_query)
        .transpose()
        .map_err(|e| RestError::InvalidBody {
            message: e.to_string(),
        })
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, RestError> {
    serde_json::to_value(body).map_err(|e| RestError::InvalidBody {
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, RestError> {
    let HttpResponse { code, body, .. } = response;
    T::deserialize(&body).map_err(|source| {
        HttpError::from(ResponseDecodingError::Body {
            code,
            body: body.to_string(),
            source,
        })
        .into()
    })
}

/// Normalizes a REST API path.
///
/// 1. Strips leading `/` characters
/// 2. Strips a trailing `.json` suffix
/// 3. Appends `.json`
/// 4. Rejects paths that end up empty
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
