//! # Cart Client
//!
//! The handle the storefront holds: read the cart, watch it, and request changes.
//! Rejections never reach the caller as errors; they become a notice for the shopper
//! and an [`Outcome::Rejected`] the caller is free to ignore.

use crate::cart_actor::{CartAction, CartChange, CartError};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{cart_total, Cart, CartId, CartLine, ProductId};
use crate::notify::{Notice, Notifier};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Result of a cart operation as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The cart changed and the new snapshot is saved.
    Committed,
    /// The request was a no-op.
    Unchanged,
    /// The request failed; `Notice` has been sent to the notifier.
    Rejected(Notice),
}

/// Client for interacting with a cart session.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
    watcher: watch::Receiver<Vec<CartLine>>,
    notifier: Arc<dyn Notifier>,
}

impl CartClient {
    pub fn new(
        inner: ResourceClient<Cart>,
        cart_id: CartId,
        watcher: watch::Receiver<Vec<CartLine>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inner,
            cart_id,
            watcher,
            notifier,
        }
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// The cart as of the last commit.
    pub fn cart(&self) -> Vec<CartLine> {
        self.watcher.borrow().clone()
    }

    /// A receiver that observes every committed cart.
    pub fn subscribe(&self) -> watch::Receiver<Vec<CartLine>> {
        self.watcher.clone()
    }

    pub fn total(&self) -> f64 {
        cart_total(&self.watcher.borrow())
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.watcher.borrow().iter().map(|line| line.amount).sum()
    }

    /// Reads the cart through the actor, after every request queued before it.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Cart, FrameworkError> {
        debug!("Sending request");
        self.inner
            .get(self.cart_id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(self.cart_id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Outcome {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(self.cart_id, CartAction::Add(product_id))
            .await;
        self.settle(result, Notice::AddFailed)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Outcome {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(self.cart_id, CartAction::Remove(product_id))
            .await;
        self.settle(result, Notice::RemoveFailed)
    }

    #[instrument(skip(self))]
    pub async fn update_product_amount(&self, product_id: ProductId, amount: i64) -> Outcome {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(self.cart_id, CartAction::SetAmount { product_id, amount })
            .await;
        self.settle(result, Notice::UpdateFailed)
    }

    /// Turns an actor reply into an outcome, notifying the shopper on failure.
    ///
    /// Cart errors carry their own notice; plumbing errors use the operation's `fallback`.
    fn settle(&self, result: Result<CartChange, FrameworkError>, fallback: Notice) -> Outcome {
        match result {
            Ok(CartChange::Committed) => Outcome::Committed,
            Ok(CartChange::Unchanged) => Outcome::Unchanged,
            Err(e) => {
                let notice = e
                    .entity_error::<CartError>()
                    .map_or(fallback, CartError::notice);
                warn!(error = %e, ?notice, "Cart operation rejected");
                self.notifier.notify(notice);
                Outcome::Rejected(notice)
            }
        }
    }
}
