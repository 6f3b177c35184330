//! Inventory level resource.
//!
//! An inventory level is keyed by `inventory_item_id` and `location_id`
//! rather than an id, so apart from listing, everything goes through
//! associated functions.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{InventoryLevel, InventoryLevelListParams};
//!
//! let levels = InventoryLevel::all(&client, Some(InventoryLevelListParams {
//!     location_ids: vec![655_441_491],
//!     ..Default::default()
//! })).await?;
//!
//! let level = InventoryLevel::adjust(&client, 808_950_810, 655_441_491, -5).await?;
//! let level = InventoryLevel::set(&client, 808_950_810, 655_441_491, 42, None).await?;
//! InventoryLevel::delete_at_location(&client, 808_950_810, 655_441_491).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{ListOptions, RestClient};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// The available quantity of an inventory item at a location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl InventoryLevel {
    /// Adds `available_adjustment` (which may be negative) to the available
    /// quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// adjustment.
    pub async fn adjust(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        available_adjustment: i64,
    ) -> Result<Self, ResourceError> {
        let body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available_adjustment": available_adjustment,
        });
        post_action(client, "inventory_levels/adjust", body).await
    }

    /// Stocks an inventory item at a location.
    ///
    /// With `relocate_if_necessary`, the item is moved off a fulfillment
    /// service location it is already stocked at.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// connection.
    pub async fn connect(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        relocate_if_necessary: Option<bool>,
    ) -> Result<Self, ResourceError> {
        let mut body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
        });
        if let Some(relocate) = relocate_if_necessary {
            body["relocate_if_necessary"] = Value::Bool(relocate);
        }
        post_action(client, "inventory_levels/connect", body).await
    }

    /// Sets the available quantity to `available`, connecting the item to
    /// the location first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// quantity.
    pub async fn set(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
        available: i64,
        disconnect_if_necessary: Option<bool>,
    ) -> Result<Self, ResourceError> {
        let mut body = json!({
            "inventory_item_id": inventory_item_id,
            "location_id": location_id,
            "available": available,
        });
        if let Some(disconnect) = disconnect_if_necessary {
            body["disconnect_if_necessary"] = Value::Bool(disconnect);
        }
        post_action(client, "inventory_levels/set", body).await
    }

    /// Removes an inventory item from a location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the item isn't stocked there.
    pub async fn delete_at_location(
        client: &RestClient,
        inventory_item_id: u64,
        location_id: u64,
    ) -> Result<(), ResourceError> {
        let key = LevelKey {
            inventory_item_id,
            location_id,
        };
        client
            .delete_with_query(Self::PLURAL, Some(&key))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(key.to_string())))
    }
}

/// Posts to one of the inventory action endpoints. Their bodies are sent
/// without a resource envelope.
async fn post_action(
    client: &RestClient,
    path: &str,
    body: Value,
) -> Result<InventoryLevel, ResourceError> {
    let response = client
        .post(path, body, None)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, InventoryLevel::NAME, None))?;
    ResourceResponse::from_http_response(response, InventoryLevel::KEY)
        .map(ResourceResponse::into_inner)
}

#[derive(Serialize)]
struct LevelKey {
    inventory_item_id: u64,
    location_id: u64,
}

impl std::fmt::Display for LevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.inventory_item_id, self.location_id)
    }
}

impl RestResource for InventoryLevel {
    type FindParams = ();
    type AllParams = InventoryLevelListParams;
    type CountParams = ();

    const NAME: &'static str = "InventoryLevel";
    const KEY: &'static str = "inventory_level";
    const PLURAL: &'static str = "inventory_levels";

    const PATHS: &'static [ResourcePath] = &[ResourcePath::standard(
        ResourceOperation::All,
        &[],
        "inventory_levels",
    )];

    fn get_id(&self) -> Option<u64> {
        None
    }
}

/// Parameters for listing inventory levels. Shopify requires at least one
/// of `inventory_item_ids` or `location_ids`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryLevelListParams {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inventory_item_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_ids: Vec<u64>,
}

impl From<ListOptions> for InventoryLevelListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_query;

    #[test]
    fn test_inventory_level_has_no_id() {
        let level: InventoryLevel = serde_json::from_value(json!({
            "inventory_item_id": 808_950_810,
            "location_id": 655_441_491,
            "available": 42,
            "updated_at": "2024-01-15T10:30:00-05:00"
        }))
        .unwrap();

        assert_eq!(level.available, Some(42));
        assert!(level.get_id().is_none());
    }

    #[test]
    fn test_list_params_join_ids() {
        let params = InventoryLevelListParams {
            inventory_item_ids: vec![808_950_810, 39_072_856],
            location_ids: vec![655_441_491],
            list: ListOptions {
                limit: Some(50),
                ..Default::default()
            },
        };
        let query = to_query(&params).unwrap();

        assert_eq!(query["inventory_item_ids"], "808950810,39072856");
        assert_eq!(query["location_ids"], "655441491");
        assert_eq!(query["limit"], "50");
    }

    #[test]
    fn test_level_key_query() {
        let key = LevelKey {
            inventory_item_id: 1,
            location_id: 2,
        };
        let query = to_query(&key).unwrap();
        assert_eq!(query["inventory_item_id"], "1");
        assert_eq!(query["location_id"], "2");
        assert_eq!(key.to_string(), "1@2");
    }
}
