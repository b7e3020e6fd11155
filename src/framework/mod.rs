//! Generic actor building blocks.
//!
//! - [`ActorEntity`] - what a resource must implement
//! - [`ResourceActor`] - the mailbox loop that owns resources
//! - [`ResourceClient`] - the cloneable handle used to reach it
//! - [`ActorClient`] - shared behaviour for domain clients
//! - [`FrameworkError`] - plumbing failures
//!
//! See [`mock`] for testing clients without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
