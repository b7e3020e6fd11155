//! # Cart Actor
//!
//! The shopper's [`Cart`] lives inside a [`ResourceActor`], which makes the actor's
//! mailbox the single writer for the cart: add, remove and set-quantity requests are
//! applied one after another, each finishing its stock lookup and snapshot write before
//! the next one reads the cart.
//!
//! ## Structure
//!
//! - [`entity`] - the [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`], [`CartChange`] and [`CartOpen`]
//! - [`error`] - [`CartError`] and the notice each error maps to
//!
//! ## Commit rule
//!
//! An action either commits (snapshot saved, in-memory lines replaced, new lines
//! published to watchers) or leaves everything as it was. The snapshot is written
//! first; if the write fails the in-memory cart is not touched.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::catalog::Catalog;
use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Cart, CartLine};
use crate::storage::DurableStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Collaborators injected into the cart actor when it starts.
pub struct CartContext {
    catalog: Arc<dyn Catalog>,
    store: Arc<dyn DurableStore>,
    publisher: watch::Sender<Vec<CartLine>>,
}

impl CartContext {
    /// `publisher` receives the full cart after it is restored and after every commit.
    pub fn new(
        catalog: Arc<dyn Catalog>,
        store: Arc<dyn DurableStore>,
        publisher: watch::Sender<Vec<CartLine>>,
    ) -> Self {
        Self {
            catalog,
            store,
            publisher,
        }
    }

    fn publish(&self, lines: &[CartLine]) {
        self.publisher.send_replace(lines.to_vec());
    }
}

/// Creates a cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
