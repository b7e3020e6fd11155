//! # Cart Store
//!
//! > **A shopping cart kept by an actor, checked against live stock, saved on every change.**
//!
//! The cart is a list of lines (`id`, `title`, `price`, `image`, `amount`). Adding a product,
//! removing it or changing its quantity goes through a single actor, which reads stock from
//! the catalog, writes the whole cart to a durable snapshot and only then swaps the new
//! lines in. Rejected operations leave the cart untouched and raise a notice for the shopper.
//!
//! ## 🚀 Core Concepts
//!
//! ### One writer per cart
//! The cart lives inside a [`ResourceActor`](framework::ResourceActor). Its mailbox is the
//! queue: two quick clicks on "add" are applied one after the other, the second one seeing
//! the first one's result. No lock guards the lines.
//!
//! ### Commit or nothing
//! A change is saved through the [`DurableStore`](storage::DurableStore) before it becomes
//! the in-memory cart. A failed stock lookup, product lookup or save leaves both as they were.
//!
//! ### Watching the cart
//! Every commit is published on a `tokio::sync::watch` channel before the operation's reply
//! is sent, so [`CartClient::cart`](clients::CartClient::cart) never lags a completed call.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>`, its client, the [`ActorEntity`](framework::ActorEntity)
//! trait and the [`mock`](framework::mock) helpers for testing clients.
//!
//! ### 2. The Domain ([`model`], [`cart_actor`], [`catalog_actor`])
//! - [`model`] - products, stock and cart lines
//! - [`cart_actor`] - the cart entity and its add/remove/set-quantity rules
//! - [`catalog_actor`] - an in-memory catalog run as an actor
//!
//! ### 3. The Edges ([`catalog`], [`storage`], [`notify`])
//! - [`catalog`] - the [`Catalog`](catalog::Catalog) trait and its HTTP implementation
//! - [`storage`] - the snapshot under the `@RocketShoes:cart` key, in a file or in memory
//! - [`notify`] - shopper-facing notices
//!
//! ### 4. The Interface ([`clients`], [`lifecycle`], [`config`])
//! - [`CartClient`](clients::CartClient) - the handle the storefront holds
//! - [`CartSystem`](lifecycle::CartSystem) - spawns and shuts down a cart session
//! - [`Settings`](config::Settings) - TOML configuration
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
