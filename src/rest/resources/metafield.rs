//! Metafield resource and the [`HasMetafields`] owner trait.
//!
//! Metafields are reachable two ways:
//! - shop-level, as a resource of their own: `metafields/{id}`
//! - under an owner: `products/{owner_id}/metafields/{id}`,
//!   `customers/{owner_id}/metafields/{id}`, `orders/{owner_id}/metafields/{id}`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{HasMetafields, Metafield, Product};
//!
//! let metafield = Metafield {
//!     namespace: Some("inventory".to_string()),
//!     key: Some("warehouse".to_string()),
//!     value: Some(serde_json::json!(25)),
//!     metafield_type: Some("number_integer".to_string()),
//!     ..Default::default()
//! };
//! let created = Product::create_metafield(&client, 632_910_392, &metafield).await?;
//!
//! let all = Product::list_metafields(&client, 632_910_392, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, ListOptions, RestClient};
use crate::rest::resource::{encode_query, envelope};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// A namespaced key/value pair attached to a shop or another resource.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Groups related metafields; use your app's namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Identifies the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value. Its shape depends on `metafield_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// The Shopify metafield type, e.g. `single_line_text_field`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The ID of the owning resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// The kind of the owning resource, e.g. `product`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_resource: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Metafield {
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = MetafieldCountParams;

    const NAME: &'static str = "Metafield";
    const KEY: &'static str = "metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "metafields/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "metafields"),
        ResourcePath::standard(ResourceOperation::Count, &[], "metafields/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "metafields"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "metafields/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "metafields/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for finding a single metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListParams {
    /// Paging and common filters.
    #[serde(flatten)]
    pub list: ListOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,
}

impl From<ListOptions> for MetafieldListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Parameters for counting metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn owner_path(owner: &str, owner_id: u64, rest: Option<&str>) -> String {
    match rest {
        Some(rest) => format!("{owner}/{owner_id}/metafields/{rest}"),
        None => format!("{owner}/{owner_id}/metafields"),
    }
}

fn operation_error(operation: ResourceOperation) -> ResourceError {
    ResourceError::PathResolutionFailed {
        resource: Metafield::NAME,
        operation: operation.as_str(),
    }
}

/// Metafield access for resources that can own metafields.
///
/// Implementors only name the path segment of the owner; every method
/// works under `{OWNER_PATH}/{owner_id}/metafields`.
#[allow(async_fn_in_trait)]
pub trait HasMetafields: RestResource {
    /// The owner's path segment, e.g. `products`.
    const OWNER_PATH: &'static str = Self::PLURAL;

    /// Lists the metafields of one owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the owner doesn't exist.
    async fn list_metafields(
        client: &RestClient,
        owner_id: u64,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        let path = owner_path(Self::OWNER_PATH, owner_id, None);
        let response = client
            .get(&path, encode_query(params.as_ref())?)
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Self::NAME, Some(owner_id.to_string()))
            })?;
        ResourceResponse::from_http_response(response, Metafield::PLURAL)
    }

    /// Counts the metafields of one owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the owner doesn't exist.
    async fn count_metafields(
        client: &RestClient,
        owner_id: u64,
        params: Option<MetafieldCountParams>,
    ) -> Result<u64, ResourceError> {
        let path = owner_path(Self::OWNER_PATH, owner_id, Some("count"));
        client
            .count(&path, params.as_ref())
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(owner_id.to_string())))
    }

    /// Fetches one metafield of an owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield doesn't exist.
    async fn get_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield_id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        let path = owner_path(Self::OWNER_PATH, owner_id, Some(&metafield_id.to_string()));
        let response = client
            .get(&path, encode_query(params.as_ref())?)
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Metafield::NAME, Some(metafield_id.to_string()))
            })?;
        ResourceResponse::from_http_response(response, Metafield::KEY)
    }

    /// Creates a metafield on an owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    async fn create_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        let path = owner_path(Self::OWNER_PATH, owner_id, None);
        let response = client
            .request(
                HttpMethod::Post,
                &path,
                Some(envelope(Metafield::KEY, metafield)?),
                None,
            )
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Self::NAME, Some(owner_id.to_string()))
            })?;
        ResourceResponse::from_http_response(response, Metafield::KEY)
            .map(ResourceResponse::into_inner)
    }

    /// Updates an existing metafield of an owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if `metafield` has no
    /// ID, and [`ResourceError::ValidationFailed`] if Shopify rejects it.
    async fn update_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        let id = metafield
            .id
            .ok_or_else(|| operation_error(ResourceOperation::Update))?;
        let path = owner_path(Self::OWNER_PATH, owner_id, Some(&id.to_string()));
        let response = client
            .request(
                HttpMethod::Put,
                &path,
                Some(envelope(Metafield::KEY, metafield)?),
                None,
            )
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Metafield::NAME, Some(id.to_string()))
            })?;
        ResourceResponse::from_http_response(response, Metafield::KEY)
            .map(ResourceResponse::into_inner)
    }

    /// Deletes a metafield of an owner.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield doesn't exist.
    async fn delete_metafield(
        client: &RestClient,
        owner_id: u64,
        metafield_id: u64,
    ) -> Result<(), ResourceError> {
        let path = owner_path(Self::OWNER_PATH, owner_id, Some(&metafield_id.to_string()));
        client.delete(&path, None).await.map_err(|e| {
            ResourceError::from_rest_error(e, Metafield::NAME, Some(metafield_id.to_string()))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_query;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_metafield_type_is_renamed() {
        let metafield = Metafield {
            namespace: Some("inventory".to_string()),
            key: Some("warehouse".to_string()),
            value: Some(json!(25)),
            metafield_type: Some("number_integer".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&metafield).unwrap();
        assert_eq!(
            value,
            json!({
                "namespace": "inventory",
                "key": "warehouse",
                "value": 25,
                "type": "number_integer"
            })
        );
    }

    #[test]
    fn test_metafield_deserializes_string_and_numeric_values() {
        let text: Metafield = serde_json::from_value(json!({
            "id": 721_389_482,
            "value": "a basic string",
            "type": "single_line_text_field",
            "owner_id": 548_380_009,
            "owner_resource": "shop",
            "created_at": "2026-01-02T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(text.id, Some(721_389_482));
        assert_eq!(text.value, Some(json!("a basic string")));
        assert_eq!(text.owner_resource.as_deref(), Some("shop"));
        assert!(text.created_at.is_some());
    }

    #[test]
    fn test_metafield_round_trip_with_omitted_fields() {
        let metafield = Metafield {
            id: Some(1),
            key: Some("color".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&metafield).unwrap();
        let decoded: Metafield = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, metafield);
    }

    #[test]
    fn test_owner_path() {
        assert_eq!(owner_path("products", 1, None), "products/1/metafields");
        assert_eq!(owner_path("customers", 2, Some("count")), "customers/2/metafields/count");
        assert_eq!(owner_path("orders", 3, Some("4")), "orders/3/metafields/4");
    }

    #[test]
    fn test_shop_level_paths() {
        let path = get_path(Metafield::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(path.template, "metafields/{id}");
        assert_eq!(path.http_method, HttpMethod::Put);

        let path = get_path(Metafield::PATHS, ResourceOperation::Count, &[]).unwrap();
        assert_eq!(path.template, "metafields/count");
    }

    #[test]
    fn test_list_params_flatten_cursor() {
        let params = MetafieldListParams {
            namespace: Some("custom".to_string()),
            ..ListOptions::cursor("abc", Some(5)).into()
        };

        let query = to_query(&params).unwrap();
        assert_eq!(query["page_info"], "abc");
        assert_eq!(query["limit"], "5");
        assert_eq!(query["namespace"], "custom");
        assert_eq!(query.len(), 3);
    }
}
