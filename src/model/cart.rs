use super::product::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a cart session inside the cart actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One product in the cart.
///
/// `title`, `price` and `image` are copied from the catalog when the line is created
/// and never refreshed. `amount` is at least 1; a line is removed rather than zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartLine {
    /// Starts a line for `product` with a single unit.
    pub fn first_unit(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// The shopper's cart: lines in insertion order, unique by product id.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity); see
/// [`cart_actor`](crate::cart_actor) for the operations it accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == product_id)
    }

    pub fn total(&self) -> f64 {
        cart_total(&self.lines)
    }
}

/// Sum of `price * amount` over `lines`.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_uses_storefront_field_names() {
        let line = CartLine {
            id: ProductId(5),
            title: "Sneaker".to_string(),
            price: 139.9,
            image: "https://cdn.example/sneaker.jpg".to_string(),
            amount: 2,
        };

        let json = serde_json::to_value(vec![line.clone()]).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": 5,
                "title": "Sneaker",
                "price": 139.9,
                "image": "https://cdn.example/sneaker.jpg",
                "amount": 2
            }])
        );

        let back: Vec<CartLine> = serde_json::from_value(json).unwrap();
        assert_eq!(back, vec![line]);
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        let mut cart = Cart::new(CartId(1));
        cart.lines.push(CartLine {
            amount: 3,
            ..CartLine::first_unit(Product {
                id: ProductId(1),
                title: "A".into(),
                price: 10.0,
                image: String::new(),
            })
        });
        cart.lines.push(CartLine::first_unit(Product {
            id: ProductId(2),
            title: "B".into(),
            price: 2.5,
            image: String::new(),
        }));

        assert_eq!(cart.total(), 32.5);
        assert_eq!(cart.line(ProductId(2)).map(|l| l.amount), Some(1));
        assert!(cart.line(ProductId(9)).is_none());
    }
}
