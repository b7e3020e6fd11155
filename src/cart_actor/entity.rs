//! [`ActorEntity`] implementation for [`Cart`].

use super::actions::{CartAction, CartChange, CartOpen};
use super::error::{CartError, FailureCause};
use super::CartContext;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartId, CartLine, ProductId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::convert::Infallible;
use tracing::{debug, info, warn};

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartOpen;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartChange;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartOpen) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    /// Restores the cart from the durable store. An unreadable snapshot starts an empty cart.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), Self::Error> {
        match ctx.store.load() {
            Ok(Some(lines)) => self.lines = sanitize(lines),
            Ok(None) => {}
            Err(e) => warn!(cart_id = %self.id, error = %e, "Ignoring unreadable cart snapshot"),
        }
        info!(cart_id = %self.id, lines = self.lines.len(), "Cart restored");
        ctx.publish(&self.lines);
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &CartContext,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartChange, Self::Error> {
        let change = match action {
            CartAction::Add(product_id) => self.add_product(product_id, ctx).await?,
            CartAction::Remove(product_id) => self.remove_product(product_id, ctx)?,
            CartAction::SetAmount { product_id, amount } => {
                self.set_amount(product_id, amount, ctx).await?
            }
        };
        if change == CartChange::Committed {
            ctx.publish(&self.lines);
        }
        Ok(change)
    }
}

impl Cart {
    async fn add_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<CartChange, CartError> {
        let add_failed = |cause: FailureCause| CartError::AddFailed { product_id, cause };

        let existing = self.line(product_id).map(|line| line.amount);
        let stock = ctx
            .catalog
            .stock(product_id)
            .await
            .map_err(|e| add_failed(e.into()))?;

        let requested = i64::from(existing.unwrap_or(0)) + 1;
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        if existing.is_some() {
            return self.set_amount(product_id, requested, ctx).await;
        }

        let product = ctx
            .catalog
            .product(product_id)
            .await
            .map_err(|e| add_failed(e.into()))?;
        // The line is keyed by the id that was asked for, whatever the catalog echoes back.
        let line = CartLine {
            id: product_id,
            ..CartLine::first_unit(product)
        };

        let mut next = self.lines.clone();
        next.push(line);
        self.commit(next, ctx).map_err(add_failed)?;
        info!(cart_id = %self.id, %product_id, lines = self.lines.len(), "Product added");
        Ok(CartChange::Committed)
    }

    fn remove_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<CartChange, CartError> {
        let remove_failed = |cause: FailureCause| CartError::RemoveFailed { product_id, cause };

        if self.line(product_id).is_none() {
            return Err(remove_failed(FailureCause::NotInCart));
        }

        let next = self
            .lines
            .iter()
            .filter(|line| line.id != product_id)
            .cloned()
            .collect();
        self.commit(next, ctx).map_err(remove_failed)?;
        info!(cart_id = %self.id, %product_id, lines = self.lines.len(), "Product removed");
        Ok(CartChange::Committed)
    }

    async fn set_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
        ctx: &CartContext,
    ) -> Result<CartChange, CartError> {
        if amount <= 0 {
            debug!(cart_id = %self.id, %product_id, amount, "Ignoring non-positive amount");
            return Ok(CartChange::Unchanged);
        }

        let update_failed = |cause: FailureCause| CartError::UpdateFailed { product_id, cause };

        let stock = ctx
            .catalog
            .stock(product_id)
            .await
            .map_err(|e| update_failed(e.into()))?;
        if amount > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let Some(index) = self.lines.iter().position(|line| line.id == product_id) else {
            debug!(cart_id = %self.id, %product_id, "Product not in cart, quantity change dropped");
            return Ok(CartChange::Unchanged);
        };
        let amount = u32::try_from(amount)
            .map_err(|_| update_failed(FailureCause::AmountOutOfRange(amount)))?;

        let mut next = self.lines.clone();
        if let Some(line) = next.get_mut(index) {
            line.amount = amount;
        }
        self.commit(next, ctx).map_err(update_failed)?;
        info!(cart_id = %self.id, %product_id, amount, "Quantity changed");
        Ok(CartChange::Committed)
    }

    /// Saves `next` and only then makes it the current cart.
    fn commit(&mut self, next: Vec<CartLine>, ctx: &CartContext) -> Result<(), FailureCause> {
        ctx.store.save(&next)?;
        self.lines = next;
        Ok(())
    }
}

/// Drops lines that break the cart invariants: zero amounts and repeated product ids.
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let total = lines.len();
    let mut seen = HashSet::new();
    let kept: Vec<CartLine> = lines
        .into_iter()
        .filter(|line| line.amount > 0 && seen.insert(line.id))
        .collect();
    if kept.len() != total {
        warn!(dropped = total - kept.len(), "Snapshot contained invalid cart lines");
    }
    kept
}
