//! Resource bindings for the Admin REST API.
//!
//! Every resource with an id implements [`RestResource`](super::RestResource)
//! and gets `find`, `all`, `count`, `save` and `delete` from it, limited to
//! the operations Shopify allows for that resource. Resource-specific
//! endpoints are inherent functions on the type.
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::{Product, ProductListParams, ProductStatus};
//!
//! let products = Product::all(&client, Some(ProductListParams {
//!     status: vec![ProductStatus::Active],
//!     ..Default::default()
//! })).await?;
//! for product in products.iter() {
//!     println!("{:?}", product.title);
//! }
//! ```

mod api_permissions;
mod customer;
mod gift_card;
mod inventory_level;
mod metafield;
mod order;
mod order_risk;
mod product;
mod redirect;
mod theme;
mod webhook;

pub use api_permissions::ApiPermissions;
pub use customer::{
    Customer, CustomerAddress, CustomerCountParams, CustomerFindParams, CustomerSearchParams,
    MarketingConsent,
};
pub use gift_card::{GiftCard, GiftCardCountParams, GiftCardListParams, GiftCardSearchParams};
pub use inventory_level::{InventoryLevel, InventoryLevelListParams};
pub use metafield::{
    HasMetafields, Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams,
};
pub use order::{LineItem, Order, OrderCountParams, OrderFindParams, OrderListParams};
pub use order_risk::{OrderRisk, RiskRecommendation};
pub use product::{
    Product, ProductCountParams, ProductFindParams, ProductImage, ProductListParams,
    ProductOption, ProductStatus, ProductVariant,
};
pub use redirect::{Redirect, RedirectCountParams, RedirectFindParams, RedirectListParams};
pub use theme::{Theme, ThemeFindParams, ThemeListParams, ThemeRole};
pub use webhook::{Webhook, WebhookCountParams, WebhookFindParams, WebhookFormat, WebhookListParams};
