//! Error types for catalog lookups.

use crate::model::ProductId;
use thiserror::Error;

/// Errors raised while reading from a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no product with this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The HTTP request could not be completed or its body could not be decoded.
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// A product listing was rejected by the in-memory catalog.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    /// An error occurred while communicating with the catalog actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
