//! HTTP client for Shopify Admin API communication.
//!
//! [`HttpClient`] sends authenticated requests, tracks the shop's call
//! budget, and retries rate-limited requests according to the configured
//! [`RateLimitPolicy`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::Credentials;
use crate::clients::errors::{
    HttpError, HttpResponseError, MaxHttpRetriesExceededError, RateLimitError,
    ResponseDecodingError,
};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{ApiCallLimit, HttpResponse};
use crate::clients::rate_limit::{RateLimitPolicy, RateLimiter};
use crate::config::ShopifyConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Admin API of one shop.
///
/// The client handles:
/// - Base URI construction from the shop domain or a `base_url` override
/// - Default headers and authentication
/// - Call-limit tracking, optional throttling, and retries on 429
/// - Cancellation and per-request timeouts
///
/// Cloning is cheap. Clones share the connection pool and the call-limit
/// tracker.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new("/admin/api/2026-07", &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products.json")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., `/admin/api/2026-07`).
    base_path: String,
    default_headers: HashMap<String, String>,
    credentials: Credentials,
    policy: RateLimitPolicy,
    timeout: Option<Duration>,
    limiter: Arc<RateLimiter>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., `/admin/api/2026-07`)
    /// * `config` - Shop, credentials and client options
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created.
    pub fn new(base_path: impl Into<String>, config: &ShopifyConfig) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let shop = config.shop().as_ref();

        let base_uri = config
            .base_url()
            .map_or_else(|| format!("https://{shop}"), |url| url.base_uri().to_string());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify REST Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Proxies route on Host.
        if config.base_url().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
            credentials: config.credentials().clone(),
            policy: *config.rate_limit_policy(),
            timeout: config.timeout(),
            limiter: Arc::new(RateLimiter::new()),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the rate limit policy in effect.
    #[must_use]
    pub const fn rate_limit_policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    /// Returns the last call limit reported by Shopify, if any.
    #[must_use]
    pub fn rate_limit(&self) -> Option<ApiCallLimit> {
        self.limiter.current()
    }

    /// Sends a request to the Admin API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction and header merging
    /// - Throttling, when enabled by the policy
    /// - Response parsing and call-limit bookkeeping
    /// - Retries of 429 responses while tries remain
    /// - Deprecation warning logging
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A transport error or timeout occurs (`Network`)
    /// - The cancellation token fires (`Cancelled`)
    /// - A non-2xx response other than 429 is received (`Response`)
    /// - A 429 is received and only one try is allowed (`RateLimited`)
    /// - Every try was rate limited (`MaxRetries`)
    /// - A 2xx body is not valid JSON (`Decoding`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let max_tries = request.tries.unwrap_or_else(|| self.policy.max_tries());
        let token = request.cancellation.clone().unwrap_or_default();
        let timeout = request.timeout.or(self.timeout);

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            if self.policy.throttle() {
                let wait = self.limiter.delay_before_next(&self.policy);
                if !wait.is_zero() {
                    tracing::debug!(
                        path = %request.path,
                        wait = ?wait,
                        "waiting for call limit to replenish"
                    );
                    sleep_or_cancel(wait, &token).await?;
                }
            }

            let mut req_builder = self.client.request(request.http_method.into(), &url);
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            req_builder = self.credentials.apply(req_builder);
            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }
            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_string());
            }
            if let Some(timeout) = timeout {
                req_builder = req_builder.timeout(timeout);
            }

            tracing::debug!(
                method = %request.http_method,
                path = %request.path,
                attempt = tries,
                "sending request"
            );

            let (code, res_headers, body_text) = tokio::select! {
                biased;
                () = token.cancelled() => return Err(HttpError::Cancelled),
                result = Self::send(req_builder) => result?,
            };

            let body = if body_text.trim().is_empty() {
                serde_json::json!({})
            } else {
                match serde_json::from_str(&body_text) {
                    Ok(value) => value,
                    Err(source) if (200..300).contains(&code) => {
                        return Err(ResponseDecodingError::Body {
                            code,
                            body: body_text,
                            source,
                        }
                        .into());
                    }
                    // Error pages fall back to the status line.
                    Err(_) => serde_json::Value::Null,
                }
            };

            let response = HttpResponse::new(code, res_headers, body);
            if let Some(limit) = response.api_call_limit {
                self.limiter.record(limit);
            }

            tracing::debug!(
                status = code,
                call_limit = ?response.api_call_limit,
                "received response"
            );

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    "Deprecated request to Shopify API at {}, received reason: {}",
                    request.path,
                    reason
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let error_reference = response.request_id().map(String::from);
            let error = HttpResponseError::from_response(code, &response.body, error_reference);

            if code != 429 {
                return Err(HttpError::Response(error));
            }

            let retry_after = response.retry_after();
            if let Some(delay) = retry_after {
                self.limiter.record_retry_after(delay);
            }

            if tries >= max_tries {
                if max_tries == 1 {
                    return Err(HttpError::RateLimited(RateLimitError {
                        retry_after,
                        response: error,
                    }));
                }
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: max_tries,
                    message: error.message,
                    error_reference: error.error_reference,
                }));
            }

            let delay = retry_after.unwrap_or_else(|| self.policy.retry_wait());
            tracing::warn!(
                status = code,
                attempt = tries,
                delay = ?delay,
                path = %request.path,
                "rate limited, retrying"
            );
            sleep_or_cancel(delay, &token).await?;
        }
    }

    async fn send(
        builder: reqwest::RequestBuilder,
    ) -> Result<(u16, HashMap<String, Vec<String>>, String), HttpError> {
        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        Ok((code, headers, body))
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

async fn sleep_or_cancel(delay: Duration, token: &CancellationToken) -> Result<(), HttpError> {
    tokio::select! {
        biased;
        () = token.cancelled() => Err(HttpError::Cancelled),
        () = tokio::time::sleep(delay) => Ok(()),
    }
}
