//! Error types for the cart actor.

use crate::catalog::CatalogError;
use crate::model::ProductId;
use crate::notify::Notice;
use crate::storage::StorageError;
use thiserror::Error;

/// Why a cart operation could not go through.
#[derive(Debug, Error)]
pub enum CartError {
    /// The requested quantity exceeds what the catalog has in stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("Failed to add product {product_id}: {cause}")]
    AddFailed {
        product_id: ProductId,
        #[source]
        cause: FailureCause,
    },

    #[error("Failed to remove product {product_id}: {cause}")]
    RemoveFailed {
        product_id: ProductId,
        #[source]
        cause: FailureCause,
    },

    #[error("Failed to change quantity of product {product_id}: {cause}")]
    UpdateFailed {
        product_id: ProductId,
        #[source]
        cause: FailureCause,
    },
}

impl CartError {
    /// The notification shown to the shopper for this error.
    pub fn notice(&self) -> Notice {
        match self {
            CartError::StockExceeded { .. } => Notice::OutOfStock,
            CartError::AddFailed { .. } => Notice::AddFailed,
            CartError::RemoveFailed { .. } => Notice::RemoveFailed,
            CartError::UpdateFailed { .. } => Notice::UpdateFailed,
        }
    }
}

/// Underlying reason for an operation failure.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("product is not in the cart")]
    NotInCart,

    #[error("amount {0} cannot be stored on a cart line")]
    AmountOutOfRange(i64),
}
