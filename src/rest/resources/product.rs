//! Product resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Product, ProductListParams, ProductStatus};
//!
//! let params = ProductListParams {
//!     product_type: Some("Snowboard".to_string()),
//!     status: vec![ProductStatus::Active],
//!     ..Default::default()
//! };
//! let products = Product::all(&client, Some(params)).await?;
//!
//! let product = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     status: Some(ProductStatus::Draft),
//!     ..Default::default()
//! };
//! let created = product.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ListOptions;
use crate::rest::resources::{HasMetafields, Metafield};
use crate::rest::{ResourceOperation, ResourcePath, RestResource};

/// Publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Archived,
    Draft,
}

/// A product option such as "Size" or "Color".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// A product variant as embedded in a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Decimal amount as a string, e.g. `"199.00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A product in a Shopify store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_title_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_description_tag: Option<String>,
    /// Metafields to create along with the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<Metafield>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Product {
    type FindParams = ProductFindParams;
    type AllParams = ProductListParams;
    type CountParams = ProductCountParams;

    const NAME: &'static str = "Product";
    const KEY: &'static str = "product";
    const PLURAL: &'static str = "products";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::standard(ResourceOperation::Find, &["id"], "products/{id}"),
        ResourcePath::standard(ResourceOperation::All, &[], "products"),
        ResourcePath::standard(ResourceOperation::Count, &[], "products/count"),
        ResourcePath::standard(ResourceOperation::Create, &[], "products"),
        ResourcePath::standard(ResourceOperation::Update, &["id"], "products/{id}"),
        ResourcePath::standard(ResourceOperation::Delete, &["id"], "products/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl HasMetafields for Product {}

/// Parameters for finding a single product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Paging and common filters.
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,
    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<String>,
    /// Sent as a comma-separated list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ProductStatus>,
}

impl From<ListOptions> for ProductListParams {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

/// Parameters for counting products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::to_query;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_product_deserialization() {
        let product: Product = serde_json::from_value(json!({
            "id": 632_910_392,
            "title": "IPod Nano - 8GB",
            "vendor": "Apple",
            "status": "active",
            "tags": "Emotive, Flash Memory",
            "created_at": "2026-01-02T09:30:00-05:00",
            "options": [{"id": 594_680_422, "name": "Color", "position": 1, "values": ["Pink", "Red"]}],
            "variants": [{"id": 808_950_810, "price": "199.00", "sku": "IPOD2008PINK", "option1": "Pink"}],
            "images": [{"id": 850_703_190, "src": "https://cdn.shopify.com/ipod-nano.png"}]
        }))
        .unwrap();

        assert_eq!(product.id, Some(632_910_392));
        assert_eq!(product.status, Some(ProductStatus::Active));
        assert_eq!(product.options[0].values, vec!["Pink", "Red"]);
        assert_eq!(product.variants[0].price.as_deref(), Some("199.00"));
        assert_eq!(product.images.len(), 1);
        assert!(product.metafields.is_empty());
    }

    #[test]
    fn test_new_product_serializes_only_set_fields() {
        let product = Product {
            title: Some("Burton Custom Freestyle 151".to_string()),
            status: Some(ProductStatus::Draft),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"title": "Burton Custom Freestyle 151", "status": "draft"})
        );
    }

    #[test]
    fn test_product_round_trip() {
        let product = Product {
            id: Some(1),
            vendor: Some("Burton".to_string()),
            variants: vec![ProductVariant {
                price: Some("10.00".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(serde_json::from_str::<Product>(&json).unwrap(), product);
    }

    #[test]
    fn test_list_params_query() {
        let params = ProductListParams {
            handle: Some("ipod-nano".to_string()),
            status: vec![ProductStatus::Active, ProductStatus::Draft],
            ..ListOptions {
                limit: Some(50),
                vendor: Some("Apple".to_string()),
                ..Default::default()
            }
            .into()
        };

        let query = to_query(&params).unwrap();
        assert_eq!(query["vendor"], "Apple");
        assert_eq!(query["handle"], "ipod-nano");
        assert_eq!(query["status"], "active,draft");
        assert_eq!(query["limit"], "50");
    }

    #[test]
    fn test_product_paths_and_keys() {
        assert_eq!(Product::KEY, "product");
        assert_eq!(Product::PLURAL, "products");
        assert_eq!(Product::OWNER_PATH, "products");

        let count = get_path(Product::PATHS, ResourceOperation::Count, &[]).unwrap();
        assert_eq!(count.template, "products/count");

        let delete = get_path(Product::PATHS, ResourceOperation::Delete, &["id"]).unwrap();
        assert_eq!(delete.template, "products/{id}");
    }
}
