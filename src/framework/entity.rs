//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to be owned by a
//! [`ResourceActor`](crate::framework::ResourceActor).
//! Both the shopper's [`Cart`](crate::model::Cart) and the in-memory
//! [`CatalogItem`](crate::model::CatalogItem) implement it, so one message loop serves both.
//!
//! Associated types pin every payload to its resource: a `Cart` only accepts
//! [`CartAction`](crate::cart_actor::CartAction)s, a `CatalogItem` only accepts
//! [`CatalogAction`](crate::catalog_actor::CatalogAction)s.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Context
/// `Context` carries the collaborators a resource needs while handling a request
/// (the catalog and durable store for a cart). It is handed to
/// [`ResourceActor::run`](crate::framework::ResourceActor::run), not to the constructor,
/// so actors can be created before their dependencies exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, generated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond create/get/update.
    type Action: Send + Sync + Debug;

    /// Value returned by a successful action.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected when the actor starts. Use `()` for none.
    type Context: Send + Sync;

    /// One error type per resource; the actor boxes it into
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and payload. Runs before [`on_create`](Self::on_create).
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs once after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
