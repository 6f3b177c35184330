//! Path tables for REST resources.
//!
//! A resource lists every URL it can be reached through. Nested resources
//! such as order risks only exist under their parent, while metafields are
//! reachable both on their own and under an owner:
//! - `orders/{order_id}/risks/{id}`
//! - `metafields/{id}`
//! - `products/{owner_id}/metafields/{id}`
//!
//! [`get_path`] picks the most specific template whose IDs are all known,
//! and [`build_path`] fills in the `{name}` slots.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use shopify_rest::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["order_id", "id"],
//!         "orders/{order_id}/risks/{id}",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["order_id", "id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("order_id", 450_789_469_u64);
//! ids.insert("id", 284_138_680_u64);
//! assert_eq!(build_path(path.template, &ids), "orders/450789469/risks/284138680");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// List resources (GET /resources).
    All,
    /// Create a new resource (POST /resources).
    Create,
    /// Update an existing resource (PUT /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
    /// Count resources (GET /resources/count).
    Count,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// One way of reaching a resource for one operation.
///
/// Templates are relative to `/admin/api/{version}/` and carry no `.json`
/// suffix; the REST client adds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// IDs the template needs (e.g., `["order_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Creates a path that uses the operation's usual HTTP method.
    #[must_use]
    pub const fn standard(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self::new(operation.default_http_method(), operation, ids, template)
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the most specific path for `operation` whose IDs are all in
/// `available_ids`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::{ResourcePath, ResourceOperation, get_path};
///
/// const PATHS: &[ResourcePath] = &[
///     ResourcePath::standard(ResourceOperation::All, &["owner_id"], "products/{owner_id}/metafields"),
///     ResourcePath::standard(ResourceOperation::All, &[], "metafields"),
/// ];
///
/// let path = get_path(PATHS, ResourceOperation::All, &["owner_id"]);
/// assert_eq!(path.unwrap().template, "products/{owner_id}/metafields");
///
/// let path = get_path(PATHS, ResourceOperation::All, &[]);
/// assert_eq!(path.unwrap().template, "metafields");
/// ```
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{name}` placeholders in `template` with values from `ids`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", 1_035_826_049_u64);
///
/// assert_eq!(build_path("gift_cards/{id}/disable", &ids), "gift_cards/1035826049/disable");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
