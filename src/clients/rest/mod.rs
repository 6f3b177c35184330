//! REST API client for the Shopify Admin API.
//!
//! This module provides a higher-level client built on top of
//! [`HttpClient`](crate::clients::HttpClient):
//!
//! - [`RestClient`]: raw and typed `get`/`post`/`put`/`delete` methods
//! - [`RestError`]: error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::{RestClient, ShopifyConfig};
//!
//! let client = RestClient::new(&config)?;
//!
//! let response = client.get("products", None).await?;
//! println!("Products: {}", response.body);
//!
//! let count = client.count::<()>("products/count", None).await?;
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products`
//! - Trailing `.json` is stripped and re-added: `products.json` -> `products.json`
//! - Paths are appended to `/admin/api/{version}/`

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
