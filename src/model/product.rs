use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier of a product. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product metadata as returned by `GET products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Stock level as returned by `GET stock/{id}`.
///
/// `amount` is signed: the storefront may report zero or a negative level, and any
/// requested quantity above it is out of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

/// A product held by the in-memory catalog actor, together with its stock.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity); see
/// [`catalog_actor`](crate::catalog_actor) for the actions it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub product: Product,
    pub stock: u32,
}

impl CatalogItem {
    pub fn stock_info(&self) -> Stock {
        Stock {
            id: self.product.id,
            amount: i64::from(self.stock),
        }
    }
}

/// Payload for registering a product with the in-memory catalog.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub title: String,
    pub price: f64,
    pub image: String,
    pub stock: u32,
}

impl ProductListing {
    pub fn new(title: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            title: title.into(),
            price,
            image: String::new(),
            stock,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Partial update of a catalog product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Restock {
    pub price: Option<f64>,
    pub stock: Option<u32>,
}
