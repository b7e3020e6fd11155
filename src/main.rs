//! # Cart Demo
//!
//! Runs a cart session against an in-memory catalog:
//! 1. Seeding the catalog actor with two products.
//! 2. Starting a [`CartSystem`] over a [`MemoryStore`].
//! 3. Adding past stock, changing a quantity and removing a line.

use cart_store::clients::{CatalogClient, Outcome};
use cart_store::lifecycle::{setup_tracing, CartSystem};
use cart_store::model::ProductListing;
use cart_store::notify::TracingNotifier;
use cart_store::storage::{MemoryStore, CART_STORAGE_KEY};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting cart demo");

    let (catalog_actor, generic_client) = cart_store::catalog_actor::new();
    let catalog_handle = tokio::spawn(catalog_actor.run(()));
    let catalog = CatalogClient::new(generic_client);

    let (sneaker, socks) = async {
        info!("Seeding catalog");
        let sneaker = catalog
            .register_product(
                ProductListing::new("Tenis de Caminhada Leve Confortavel", 179.9, 2)
                    .with_image("https://example.com/tenis.jpg"),
            )
            .await?;
        let socks = catalog
            .register_product(ProductListing::new("Meia Esportiva", 19.9, 10))
            .await?;
        Ok::<_, cart_store::catalog::CatalogError>((sneaker, socks))
    }
    .instrument(tracing::info_span!("catalog_seeding"))
    .await
    .map_err(|e| e.to_string())?;

    let store = Arc::new(MemoryStore::new());
    let system = CartSystem::start(
        Arc::new(catalog.clone()),
        store.clone(),
        Arc::new(TracingNotifier),
        32,
    )
    .await
    .map_err(|e| e.to_string())?;
    let cart = &system.cart_client;

    let span = tracing::info_span!("shopping");
    async {
        for _ in 0..3 {
            if let Outcome::Rejected(notice) = cart.add_product(sneaker).await {
                warn!(%notice, "Add rejected");
            }
        }
        cart.add_product(socks).await;
        cart.update_product_amount(socks, 4).await;
        cart.update_product_amount(socks, 0).await;
        cart.remove_product(sneaker).await;
    }
    .instrument(span)
    .await;

    info!(
        lines = cart.cart().len(),
        items = cart.item_count(),
        total = cart.total(),
        "Final cart"
    );
    if let Some(snapshot) = store.get_item(CART_STORAGE_KEY) {
        info!(%snapshot, "Saved snapshot");
    }

    system.shutdown().await?;

    drop(catalog);
    catalog_handle
        .await
        .map_err(|e| format!("Catalog actor failed: {e:?}"))?;

    info!("Demo completed successfully");
    Ok(())
}
