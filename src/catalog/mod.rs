//! # Catalog
//!
//! The remote source of product metadata and stock levels. The cart only ever reads
//! from it, and reads stock fresh on every quantity-affecting operation.
//!
//! Two implementations ship with the crate:
//!
//! - [`HttpCatalog`] - the storefront API (`GET stock/{id}`, `GET products/{id}`)
//! - [`CatalogClient`](crate::clients::CatalogClient) - the in-memory catalog actor

pub mod error;
pub mod http;

pub use error::CatalogError;
pub use http::HttpCatalog;

use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;

/// Read access to products and their stock.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches product metadata.
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Fetches the current stock level.
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError>;
}
