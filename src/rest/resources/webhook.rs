//! Webhook subscription resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Webhook, WebhookFormat};
//!
//! let webhook = Webhook {
//!     topic: Some("orders/create".to_string()),
//!     address: Some("https://example.com/hooks/orders".to_string()),
//!     format: Some(WebhookFormat::Json),
//!     ..Default::default()
//! };
//! let saved = webhook.save(&client).await?;
//! let total = Webhook::count(&client, None).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// Payload format of a webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WebhookFormat {
    #[default]
    Json,
    Xml,
}

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Where notifications are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// e.g. `orders/create`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<WebhookFormat>,
    /// Restricts the payload to these fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafield_namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private_metafield_namespaces: Vec<String>,
    /// The API version payloads are serialized with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestResource for Webhook {
    type FindParams = WebhookFindParams;
    type AllParams = WebhookListParams;
    type CountParams = WebhookCountParams;

    const NAME: &'static str = "Webhook";
    const KEY: &'static str = "webhook";
    const PLURAL: &'static str = "webhooks";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "webhooks/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "webhooks"),
        ResourcePath::standard(ResourceOperation::Count, &[], "webhooks/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "webhooks"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "webhooks/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "webhooks/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing webhooks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookListParams {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl From<ListOptions> for WebhookListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WebhookCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}
