use crate::cart_actor::{CartContext, CartOpen};
use crate::catalog::{Catalog, CatalogError, HttpCatalog};
use crate::clients::CartClient;
use crate::config::Settings;
use crate::framework::FrameworkError;
use crate::notify::Notifier;
use crate::storage::{DurableStore, FileStore};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info};

/// Errors raised while starting a [`CartSystem`].
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to set up catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to open cart: {0}")]
    Actor(#[from] FrameworkError),
}

/// A running cart session.
///
/// `CartSystem` is responsible for:
/// - **Restoring**: the cart actor loads the durable snapshot before serving requests
/// - **Dependency Wiring**: catalog, store and publisher are injected into the actor's context
/// - **Shutdown**: dropping the client and joining the actor task
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(catalog, store, Arc::new(TracingNotifier), 32).await?;
///
/// system.cart_client.add_product(ProductId(1)).await;
/// let lines = system.cart_client.cart();
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for the cart session.
    pub cart_client: CartClient,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Spawns the cart actor and opens the session.
    ///
    /// Returns once the snapshot has been restored, so `cart_client.cart()` already
    /// reflects it. A `buffer_size` of zero is raised to one.
    pub async fn start(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn DurableStore>,
        notifier: Arc<dyn Notifier>,
        buffer_size: usize,
    ) -> Result<Self, SystemError> {
        let (cart_actor, generic_client) = crate::cart_actor::new(buffer_size.max(1));
        let (publisher, watcher) = watch::channel(Vec::new());

        let handle = tokio::spawn(cart_actor.run(CartContext::new(catalog, store, publisher)));

        let cart_id = generic_client.create(CartOpen).await?;
        info!(%cart_id, "Cart session opened");

        Ok(Self {
            cart_client: CartClient::new(generic_client, cart_id, watcher, notifier),
            handles: vec![handle],
        })
    }

    /// Starts a cart against the HTTP catalog and a file snapshot, as configured.
    pub async fn from_settings(
        settings: &Settings,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, SystemError> {
        let catalog = HttpCatalog::with_timeout(
            settings.catalog.base_url.clone(),
            settings.catalog.timeout(),
        )?;
        let store = FileStore::new(&settings.storage.dir);
        info!(
            catalog = catalog.base_url(),
            snapshot = %store.path().display(),
            "Starting cart system"
        );
        Self::start(
            Arc::new(catalog),
            Arc::new(store),
            notifier,
            settings.actor.buffer_size,
        )
        .await
    }

    /// Drops the client and waits for the actor to exit.
    ///
    /// Clones of `cart_client` taken earlier keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
