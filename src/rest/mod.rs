//! Resource accessor layer for the Admin REST API.
//!
//! - **[`RestResource`] trait**: the standard operations, derived from a
//!   resource's envelope keys and path templates
//! - **[`ResourceResponse<T>`]**: a `Deref` wrapper carrying pagination,
//!   the call limit and the request id
//! - **Path building**: most-specific template selection for nested
//!   resources
//! - **[`ResourceError`]**: not-found and validation errors mapped from
//!   HTTP statuses
//!
//! Individual resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::RestClient;
//! use shopify_rest::rest::{ResourceResponse, RestResource};
//! use shopify_rest::rest::resources::Product;
//!
//! let client = RestClient::new(&config)?;
//!
//! let response: ResourceResponse<Product> = Product::find(&client, 632_910_392, None).await?;
//! println!("{:?}", response.title);
//!
//! let page = Product::all(&client, None).await?;
//! for product in page.iter() {
//!     println!("- {:?}", product.title);
//! }
//! if let Some(next) = page.next_page_options() {
//!     let page_two = Product::all(&client, Some(next.clone().into())).await?;
//! }
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
