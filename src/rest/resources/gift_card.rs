//! Gift card resource.
//!
//! Gift cards cannot be deleted. Use [`GiftCard::disable`] instead; a
//! disabled card cannot be re-enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::GiftCard;
//!
//! let card = GiftCard {
//!     initial_value: Some("100.00".to_string()),
//!     note: Some("Employee reward".to_string()),
//!     ..Default::default()
//! };
//! let saved = card.save(&client).await?;
//!
//! let disabled = GiftCard::disable(&client, saved.id.unwrap()).await?;
//! assert!(disabled.is_disabled());
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{ListOptions, RestClient};
use crate::rest::resource::encode_query;
use crate::rest::{ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

/// A gift card.
///
/// `code` is only accepted on creation; afterwards only `last_characters`
/// can be read back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Decimal amount as a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    /// Decimal amount as a string. Required on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl GiftCard {
    /// Returns `true` if the card has been disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled_at.is_some()
    }

    /// Disables a gift card.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the gift card doesn't exist.
    pub async fn disable(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        let body = json!({ "gift_card": { "id": id } });
        let response = client
            .post(&format!("gift_cards/{id}/disable"), body, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(id.to_string())))?;
        ResourceResponse::from_http_response(response, Self::KEY).map(ResourceResponse::into_inner)
    }

    /// Searches gift cards, e.g. by the last characters of the code.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] for HTTP-level errors.
    pub async fn search(
        client: &RestClient,
        params: &GiftCardSearchParams,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let response = client
            .get("gift_cards/search", encode_query(Some(params))?)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, Self::PLURAL)
    }
}

impl RestResource for GiftCard {
    type FindParams = ();
    type AllParams = GiftCardListParams;
    type CountParams = GiftCardCountParams;

    const NAME: &'static str = "GiftCard";
    const KEY: &'static str = "gift_card";
    const PLURAL: &'static str = "gift_cards";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "gift_cards/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "gift_cards"),
        ResourcePath::standard(ResourceOperation::Count, &[], "gift_cards/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "gift_cards"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "gift_cards/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for listing gift cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardListParams {
    #[serde(flatten)]
    pub list: ListOptions,
    /// `enabled` or `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ListOptions> for GiftCardListParams {
    fn from(list: ListOptions) -> Self {
        Self { list, status: None }
    }
}

/// Parameters for counting gift cards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameters for [`GiftCard::search`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GiftCardSearchParams {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}
