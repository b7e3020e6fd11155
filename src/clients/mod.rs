//! Domain clients wrapping [`ResourceClient`](crate::framework::ResourceClient).

pub mod cart_client;
pub mod catalog_client;

pub use cart_client::*;
pub use catalog_client::*;
