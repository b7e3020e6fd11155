//! # Catalog Actor
//!
//! An in-memory stand-in for the remote catalog: one [`CatalogItem`] per product,
//! owned by a [`ResourceActor`]. Product ids are handed out sequentially from 1.
//!
//! ```rust,ignore
//! let (actor, generic_client) = catalog_actor::new();
//! tokio::spawn(actor.run(()));
//! let catalog = CatalogClient::new(generic_client);
//! let id = catalog.register_product(ProductListing::new("Tenis", 139.9, 5)).await?;
//! let stock = catalog.stock(id).await?;
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::CatalogItem;

/// Creates a catalog actor and its client.
pub fn new() -> (ResourceActor<CatalogItem>, ResourceClient<CatalogItem>) {
    ResourceActor::new(32)
}
