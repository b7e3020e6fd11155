//! Starting, wiring and shutting down the cart actor.
//!
//! - [`CartSystem`] - spawns the cart actor with its catalog, store and notifier
//! - [`setup_tracing`] - initializes logging for binaries

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::setup_tracing;
