//! Order risk resource, nested under `orders/{order_id}/risks`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{OrderRisk, RiskRecommendation};
//!
//! let risks = OrderRisk::all_with_parent(&client, "order_id", 450_789_469, None).await?;
//!
//! let risk = OrderRisk {
//!     order_id: Some(450_789_469),
//!     message: Some("This order came from an anonymous proxy".to_string()),
//!     recommendation: Some(RiskRecommendation::Cancel),
//!     score: Some("1.0".to_string()),
//!     ..Default::default()
//! };
//! let created = risk.save(&client).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// What Shopify advises the merchant to do about a risk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskRecommendation {
    Cancel,
    Investigate,
    Accept,
}

/// A fraud risk assessment attached to an order.
///
/// `order_id` must be set to save or delete a risk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderRisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_cancel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Between `"0.0"` and `"1.0"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RiskRecommendation>,
}

impl RestResource for OrderRisk {
    type FindParams = ();
    type AllParams = ListOptions;
    type CountParams = ();

    const NAME: &'static str = "OrderRisk";
    const KEY: &'static str = "risk";
    const PLURAL: &'static str = "risks";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(
            ResourceOperation::Find,
            &["order_id", "id"],
            "orders/{order_id}/risks/{id}",
        ),
        ResourcePath::standard(ResourceOperation::All, &["order_id"], "orders/{order_id}/risks"),
        ResourcePath::standard(
            ResourceOperation::Create,
            &["order_id"],
            "orders/{order_id}/risks",
        ),
        ResourcePath::standard(
            ResourceOperation::Update,
            &["order_id", "id"],
            "orders/{order_id}/risks/{id}",
        ),
        ResourcePath::standard(
            ResourceOperation::Delete,
            &["order_id", "id"],
            "orders/{order_id}/risks/{id}",
        ),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }

    fn parent_ids(&self) -> Vec<(&'static str, u64)> {
        self.order_id.map(|id| ("order_id", id)).into_iter().collect()
    }
}
