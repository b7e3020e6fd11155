//! # Framework Errors
//!
//! Failures of the actor plumbing itself, shared by every resource.

/// Errors raised while talking to a [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns the entity error if it is of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
