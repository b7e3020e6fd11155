//! # ActorClient Trait
//!
//! Shared behaviour for the domain clients ([`CartClient`](crate::clients::CartClient),
//! [`CatalogClient`](crate::clients::CatalogClient)) wrapping a [`ResourceClient`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// A domain client built on top of a generic [`ResourceClient`].
///
/// Implementors pick their error type and how framework errors map onto it;
/// `get` then comes for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error type.
    type Error: From<String> + Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Maps a framework error onto the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetches an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
