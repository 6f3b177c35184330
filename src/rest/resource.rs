//! The `RestResource` trait.
//!
//! A resource type declares where it lives (its [`ResourcePath`] table)
//! and how its JSON is wrapped (the `KEY` and `PLURAL` envelope keys).
//! Everything else, from finding and listing to saving and deleting, comes
//! from default methods that run on a [`RestClient`].
//!
//! # Implementing a resource
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use shopify_rest::rest::{ResourceOperation, ResourcePath, RestResource};
//! use shopify_rest::ListOptions;
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub path: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub target: Option<String>,
//! }
//!
//! impl RestResource for Redirect {
//!     type FindParams = ();
//!     type AllParams = ListOptions;
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Redirect";
//!     const KEY: &'static str = "redirect";
//!     const PLURAL: &'static str = "redirects";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::standard(ResourceOperation::Find, &["id"], "redirects/{id}"),
//!         ResourcePath::standard(ResourceOperation::All, &[], "redirects"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let redirect = Redirect::find(&client, 668_809_255, None).await?;
//! ```

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{to_query, ListOptions, RestClient, RestError};
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A REST resource that can be fetched, listed, counted, saved and deleted.
///
/// # Associated Types
///
/// - `FindParams`: query options for `find()` (use `()` if none)
/// - `AllParams`: query options for `all()`; must accept the cursor
///   [`ListOptions`] handed back by a previous page
/// - `CountParams`: query options for `count()`
///
/// # Associated Constants
///
/// - `NAME`: type name used in error messages (e.g., "GiftCard")
/// - `KEY`: envelope key of a single resource (e.g., "gift_card")
/// - `PLURAL`: envelope key of a list (e.g., "gift_cards")
/// - `PATHS`: the URL templates for each supported operation
///
/// Resource identifiers are `u64`.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Query options for `find()` operations.
    type FindParams: Serialize + Send + Sync;

    /// Query options for `all()` operations.
    type AllParams: Serialize + From<ListOptions> + Send + Sync;

    /// Query options for `count()` operations.
    type CountParams: Serialize + Send + Sync;

    /// The type name of the resource (e.g., "Product").
    const NAME: &'static str;

    /// The JSON envelope key for a single resource (e.g., "product").
    const KEY: &'static str;

    /// The JSON envelope key for a list of resources (e.g., "products").
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID, or `None` if it has not been saved yet.
    fn get_id(&self) -> Option<u64>;

    /// Returns the parent IDs a nested resource needs in its paths,
    /// such as `("order_id", 450789469)` for an order risk.
    fn parent_ids(&self) -> Vec<(&'static str, u64)> {
        Vec::new()
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = Product::find(&client, 632_910_392, None).await?;
    /// println!("Found: {:?}", product.title);
    /// ```
    async fn find(
        client: &RestClient,
        id: u64,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([("id", id)]);
        find_at::<Self>(client, &ids, id, params.as_ref()).await
    }

    /// Finds a single nested resource by its parent's ID and its own.
    ///
    /// # Errors
    ///
    /// As [`find`](Self::find).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let risk = OrderRisk::find_with_parent(&client, "order_id", 450_789_469, 284_138_680, None).await?;
    /// ```
    async fn find_with_parent(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: u64,
        id: u64,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([(parent_id_name, parent_id), ("id", id)]);
        find_at::<Self>(client, &ids, id, params.as_ref()).await
    }

    /// Lists resources matching the given options.
    ///
    /// Returns one page. Pass [`ResourceResponse::next_page_options`] back
    /// in to fetch the following page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches,
    /// and a decoding error if the body or `Link` header is malformed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut page = Customer::all(&client, None).await?;
    /// loop {
    ///     for customer in page.iter() {
    ///         println!("{:?}", customer.email);
    ///     }
    ///     let Some(next) = page.next_page_options().cloned() else { break };
    ///     page = Customer::all(&client, Some(next.into())).await?;
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let ids: HashMap<&str, u64> = HashMap::new();
        all_at::<Self>(client, &ids, params.as_ref()).await
    }

    /// Lists nested resources under a parent (e.g., the risks of an order).
    ///
    /// # Errors
    ///
    /// As [`all`](Self::all).
    async fn all_with_parent(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: u64,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let ids = HashMap::from([(parent_id_name, parent_id)]);
        all_at::<Self>(client, &ids, params.as_ref()).await
    }

    /// Counts resources matching the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// count endpoint.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let ids: HashMap<&str, u64> = HashMap::new();
        count_at::<Self>(client, &ids, params.as_ref()).await
    }

    /// Counts nested resources under a parent.
    ///
    /// # Errors
    ///
    /// As [`count`](Self::count).
    async fn count_with_parent(
        client: &RestClient,
        parent_id_name: &str,
        parent_id: u64,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let ids = HashMap::from([(parent_id_name, parent_id)]);
        count_at::<Self>(client, &ids, params.as_ref()).await
    }

    /// Saves the resource: `POST` when it has no ID yet, `PUT` otherwise.
    ///
    /// The body is wrapped as `{KEY: self}` and the saved resource is
    /// decoded from the same envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// resource (422), and [`ResourceError::NotFound`] when updating a
    /// resource that no longer exists.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let redirect = Redirect {
    ///     path: Some("/ipod".to_string()),
    ///     target: Some("/pages/itunes".to_string()),
    ///     ..Default::default()
    /// };
    /// let created = redirect.save(&client).await?;
    /// assert!(created.id.is_some());
    /// ```
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let mut ids: HashMap<&str, u64> = self.parent_ids().into_iter().collect();
        let id = self.get_id();
        let operation = match id {
            Some(id) => {
                ids.insert("id", id);
                ResourceOperation::Update
            }
            None => ResourceOperation::Create,
        };

        let path = resolve::<Self>(operation, &ids)?;
        let url = build_path(path.template, &ids);
        let body = envelope(Self::KEY, self)?;

        tracing::debug!(
            resource = Self::NAME,
            operation = operation.as_str(),
            %url,
            "Saving resource"
        );

        let response = client
            .request(path.http_method, &url, Some(body), None)
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Self::NAME, id.map(|id| id.to_string()))
            })?;

        let saved: ResourceResponse<Self> =
            ResourceResponse::from_http_response(response, Self::KEY)?;
        Ok(saved.into_inner())
    }

    /// Deletes this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// ID, and [`ResourceError::NotFound`] if it no longer exists.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: ResourceOperation::Delete.as_str(),
        })?;

        let mut ids: HashMap<&str, u64> = self.parent_ids().into_iter().collect();
        ids.insert("id", id);
        delete_at::<Self>(client, &ids, id).await
    }

    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn delete_by_id(client: &RestClient, id: u64) -> Result<(), ResourceError> {
        let ids = HashMap::from([("id", id)]);
        delete_at::<Self>(client, &ids, id).await
    }
}

fn resolve<R: RestResource>(
    operation: ResourceOperation,
    ids: &HashMap<&str, u64>,
) -> Result<&'static ResourcePath, ResourceError> {
    let available_ids: Vec<&str> = ids.keys().copied().collect();
    get_path(R::PATHS, operation, &available_ids).ok_or(ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    })
}

async fn find_at<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, u64>,
    id: u64,
    params: Option<&R::FindParams>,
) -> Result<ResourceResponse<R>, ResourceError> {
    let path = resolve::<R>(ResourceOperation::Find, ids)?;
    let url = build_path(path.template, ids);

    let response = client
        .request(path.http_method, &url, None, encode_query(params)?)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, Some(id.to_string())))?;

    ResourceResponse::from_http_response(response, R::KEY)
}

async fn all_at<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, u64>,
    params: Option<&R::AllParams>,
) -> Result<ResourceResponse<Vec<R>>, ResourceError> {
    let path = resolve::<R>(ResourceOperation::All, ids)?;
    let url = build_path(path.template, ids);

    let response = client
        .request(path.http_method, &url, None, encode_query(params)?)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, None))?;

    ResourceResponse::from_http_response(response, R::PLURAL)
}

async fn count_at<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, u64>,
    params: Option<&R::CountParams>,
) -> Result<u64, ResourceError> {
    let path = resolve::<R>(ResourceOperation::Count, ids)?;
    let url = build_path(path.template, ids);

    client
        .count(&url, params)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, None))
}

async fn delete_at<R: RestResource>(
    client: &RestClient,
    ids: &HashMap<&str, u64>,
    id: u64,
) -> Result<(), ResourceError> {
    let path = resolve::<R>(ResourceOperation::Delete, ids)?;
    let url = build_path(path.template, ids);

    client
        .request(path.http_method, &url, None, None)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, R::NAME, Some(id.to_string())))?;
    Ok(())
}

/// Encodes optional query options, dropping them entirely when empty.
pub(crate) fn encode_query<Q: Serialize + ?Sized>(
    params: Option<&Q>,
) -> Result<Option<HashMap<String, String>>, ResourceError> {
    let query = params.map(to_query).transpose().map_err(|e| {
        ResourceError::from(RestError::InvalidBody {
            message: e.to_string(),
        })
    })?;
    Ok(query.filter(|q| !q.is_empty()))
}

/// Wraps `value` as `{key: value}`.
pub(crate) fn envelope<T: Serialize + ?Sized>(
    key: &str,
    value: &T,
) -> Result<Value, ResourceError> {
    let inner = serde_json::to_value(value).map_err(|e| {
        ResourceError::from(RestError::InvalidBody {
            message: e.to_string(),
        })
    })?;

    let mut body = serde_json::Map::new();
    body.insert(key.to_string(), inner);
    Ok(Value::Object(body))
}
