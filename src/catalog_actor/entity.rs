//! [`ActorEntity`] implementation for [`CatalogItem`].

use super::actions::CatalogAction;
use crate::catalog::CatalogError;
use crate::framework::ActorEntity;
use crate::model::{CatalogItem, Product, ProductId, ProductListing, Restock, Stock};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for CatalogItem {
    type Id = ProductId;
    type Create = ProductListing;
    type Update = Restock;
    type Action = CatalogAction;
    type ActionResult = Stock;
    type Context = ();
    type Error = CatalogError;

    /// Rejects listings without a title or with a negative or non-finite price.
    fn from_create_params(id: ProductId, listing: ProductListing) -> Result<Self, Self::Error> {
        if listing.title.trim().is_empty() {
            return Err(CatalogError::InvalidListing("title is empty".to_string()));
        }
        if !listing.price.is_finite() || listing.price < 0.0 {
            return Err(CatalogError::InvalidListing(format!(
                "price {} is not a valid amount",
                listing.price
            )));
        }
        Ok(Self {
            product: Product {
                id,
                title: listing.title,
                price: listing.price,
                image: listing.image,
            },
            stock: listing.stock,
        })
    }

    async fn on_update(&mut self, update: Restock, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::InvalidListing(format!(
                    "price {price} is not a valid amount"
                )));
            }
            self.product.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<Stock, Self::Error> {
        match action {
            CatalogAction::CheckStock => Ok(self.stock_info()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_validation() {
        let ok =
            CatalogItem::from_create_params(ProductId(1), ProductListing::new("Tenis", 99.9, 3));
        assert_eq!(ok.unwrap().stock_info(), Stock { id: ProductId(1), amount: 3 });

        let blank =
            CatalogItem::from_create_params(ProductId(2), ProductListing::new("  ", 1.0, 1));
        assert!(matches!(blank, Err(CatalogError::InvalidListing(_))));

        let negative =
            CatalogItem::from_create_params(ProductId(3), ProductListing::new("Meia", -1.0, 1));
        assert!(matches!(negative, Err(CatalogError::InvalidListing(_))));
    }

    #[tokio::test]
    async fn test_restock_changes_only_given_fields() {
        let mut item =
            CatalogItem::from_create_params(ProductId(1), ProductListing::new("Tenis", 99.9, 3))
                .unwrap();

        item.on_update(Restock { price: None, stock: Some(10) }, &()).await.unwrap();
        assert_eq!(item.stock, 10);
        assert_eq!(item.product.price, 99.9);

        let rejected = item.on_update(Restock { price: Some(f64::NAN), stock: Some(0) }, &()).await;
        assert!(rejected.is_err());
        assert_eq!(item.stock, 10);
    }
}
