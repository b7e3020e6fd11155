//! Operations accepted by the cart actor.

use crate::model::ProductId;

/// Mutations of a [`Cart`](crate::model::Cart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Adds one unit of a product, creating its line if needed.
    Add(ProductId),
    /// Removes a product's line.
    Remove(ProductId),
    /// Sets a product's quantity. Amounts of zero or below are ignored.
    SetAmount { product_id: ProductId, amount: i64 },
}

/// What an accepted action did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// The cart and its snapshot were replaced.
    Committed,
    /// Nothing to do; cart and snapshot untouched.
    Unchanged,
}

/// Payload for opening a cart session. The cart's lines come from the durable store.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartOpen;
