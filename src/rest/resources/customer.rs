//! Customer resource.
//!
//! Besides the standard operations, customers support a full-text
//! [`search`](Customer::search), listing a customer's
//! [`orders`](Customer::orders) and listing every [`tags`](Customer::tags)
//! value in use.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Customer, CustomerSearchParams};
//!
//! let customers = Customer::all(&client, None).await?;
//! if let Some(next) = customers.next_page_options() {
//!     let page_two = Customer::all(&client, Some(next.clone())).await?;
//! }
//!
//! let found = Customer::search(&client, &CustomerSearchParams {
//!     query: Some("Bob country:United States".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{ListOptions, RestClient};
use crate::rest::resource::encode_query;
use crate::rest::resources::{HasMetafields, Metafield, Order};
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// Email or SMS marketing consent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MarketingConsent {
    /// e.g. `subscribed`, `not_subscribed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<Utc>>,
    /// SMS only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_collected_from: Option<String>,
}

/// A customer's mailing address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// A customer of a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `disabled`, `invited`, `enabled` or `declined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,
    /// Decimal amount as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_marketing_consent: Option<MarketingConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_marketing_consent: Option<MarketingConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<CustomerAddress>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<CustomerAddress>,
    /// Metafields to create along with the customer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<Metafield>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Customer {
    type FindParams = CustomerFindParams;
    type AllParams = ListOptions;
    type CountParams = CustomerCountParams;

    const NAME: &'static str = "Customer";
    const KEY: &'static str = "customer";
    const PLURAL: &'static str = "customers";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "customers/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "customers"),
        ResourcePath::standard(ResourceOperation::Count, &[], "customers/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "customers"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "customers/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "customers/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Customer {}

impl Customer {
    /// Searches customers with Shopify's query syntax, e.g. `email:bob@example.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for HTTP-level errors.
    pub async fn search(
        client: &RestClient,
        params: &CustomerSearchParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let response = client
            .get("customers/search", encode_query(Some(params))?)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Lists the orders of one customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the customer doesn't exist.
    pub async fn orders(
        client: &RestClient,
        customer_id: u64,
        params: Option<ListOptions>,
    ) -> Result<ResourceResponse<Vec<Order>>, ResourceError> {
        let response = client
            .get(
                &format!("customers/{customer_id}/orders"),
                encode_query(params.as_ref())?,
            )
            .await
            .map_err(|e| {
                ResourceError::from_rest_error(e, Self::NAME, Some(customer_id.to_string()))
            })?;
        ResourceResponse::from_http_response(response, Order::PLURAL)
    }

    /// Lists every tag used on customers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for HTTP-level errors.
    pub async fn tags(client: &RestClient) -> Result<Vec<String>, ResourceError> {
        let response = client
            .get("customers/tags", None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, "tags").map(ResourceResponse::into_inner)
    }
}

/// Parameters for finding a single customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for counting customers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Parameters for [`Customer::search`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerSearchParams {
    /// Search text, e.g. `Bob country:Canada`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// e.g. `last_order_date DESC`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}
