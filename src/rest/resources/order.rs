//! Order resource (read-oriented).
//!
//! Orders can be found, listed and counted here. Their risks live in
//! [`OrderRisk`](super::OrderRisk).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::resources::HasMetafields;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// A line item of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Decimal amount as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,
}

/// An order placed in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name, e.g. `#1001`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,
    /// The customer as embedded by Shopify; shape varies with API access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Order {
    type FindParams = OrderFindParams;
    type AllParams = OrderListParams;
    type CountParams = OrderCountParams;

    const NAME: &'static str = "Order";
    const KEY: &'static str = "order";
    const PLURAL: &'static str = "orders";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "orders/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "orders"),
        ResourcePath::standard(ResourceOperation::Count, &[], "orders/count"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Order {}

/// Parameters for finding a single order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Paging and common filters.
    #[serde(flatten)]
    pub list: ListOptions,
    /// `open`, `closed`, `cancelled` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
}

impl From<ListOptions> for OrderListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Parameters for counting orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_order_deserialization() {
        let order: Order = serde_json::from_value(json!({
            "id": 450_789_469,
            "name": "#1001",
            "order_number": 1001,
            "financial_status": "partially_refunded",
            "total_price": "598.94",
            "line_items": [
                {"id": 466_157_049, "title": "IPod Nano - 8gb", "quantity": 1, "price": "199.00"}
            ],
            "customer": {"id": 207_119_551, "email": "bob.norman@mail.example.com"},
            "processed_at": "2008-01-10T11:00:00-05:00"
        }))
        .unwrap();

        assert_eq!(order.id, Some(450_789_469));
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].quantity, Some(1));
        assert_eq!(order.customer.unwrap()["id"], 207_119_551);
    }

    #[test]
    fn test_order_is_read_only() {
        assert!(get_path(Order::PATHS, ResourceOperation::Find, &["id"]).is_some());
        assert!(get_path(Order::PATHS, ResourceOperation::Count, &[]).is_some());
        assert!(get_path(Order::PATHS, ResourceOperation::Create, &[]).is_none());
        assert!(get_path(Order::PATHS, ResourceOperation::Delete, &["id"]).is_none());
    }

    #[test]
    fn test_order_list_params_from_cursor() {
        let params: OrderListParams = ListOptions::cursor("abc", Some(2)).into();
        assert_eq!(params.list.page_info.as_deref(), Some("abc"));
        assert!(params.status.is_none());
    }
}
