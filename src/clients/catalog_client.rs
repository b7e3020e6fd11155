use crate::catalog::{Catalog, CatalogError};
use crate::catalog_actor::CatalogAction;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CatalogItem, Product, ProductId, ProductListing, Restock, Stock};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the in-memory catalog actor.
///
/// Also serves as a [`Catalog`], so a cart can be wired to it in place of the HTTP catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<CatalogItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, listing))]
    pub async fn register_product(
        &self,
        listing: ProductListing,
    ) -> Result<ProductId, CatalogError> {
        debug!(?listing, "register_product called");
        let id = self.inner.create(listing).await.map_err(Self::map_error)?;
        info!(%id, "Product registered");
        Ok(id)
    }

    /// Changes price and/or stock, returning the updated item.
    #[instrument(skip(self))]
    pub async fn restock(
        &self,
        id: ProductId,
        restock: Restock,
    ) -> Result<CatalogItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(id, restock)
            .await
            .map_err(|e| lookup_error(id, e))
    }
}

/// Like [`ActorClient::map_error`], but reports a missing entity as [`CatalogError::NotFound`].
fn lookup_error(id: ProductId, e: FrameworkError) -> CatalogError {
    match e {
        FrameworkError::NotFound(_) => CatalogError::NotFound(id),
        other => CatalogClient::map_error(other),
    }
}

#[async_trait]
impl ActorClient<CatalogItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<CatalogItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<CatalogError>() {
                Ok(err) => *err,
                Err(other) => CatalogError::ActorCommunicationError(other.to_string()),
            },
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let item = self.get(id).await?.ok_or(CatalogError::NotFound(id))?;
        Ok(item.product)
    }

    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, CatalogAction::CheckStock)
            .await
            .map_err(|e| lookup_error(id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_get, MockClient};

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let mut mock = MockClient::<CatalogItem>::new();
        mock.expect_get(ProductId(9)).return_ok(None);
        mock.expect_action(ProductId(9))
            .return_err(FrameworkError::NotFound("9".to_string()));
        let catalog = CatalogClient::new(mock.client());

        let product = catalog.product(ProductId(9)).await;
        assert!(matches!(product, Err(CatalogError::NotFound(ProductId(9)))));

        let stock = catalog.stock(ProductId(9)).await;
        assert!(matches!(stock, Err(CatalogError::NotFound(ProductId(9)))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_stock_is_read_through_action() {
        let (inner, mut receiver) = create_mock_client::<CatalogItem>(4);
        let catalog = CatalogClient::new(inner);

        let task = tokio::spawn(async move { catalog.stock(ProductId(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(2));
        assert!(matches!(action, CatalogAction::CheckStock));
        responder
            .send(Ok(Stock {
                id: ProductId(2),
                amount: 5,
            }))
            .unwrap();

        let stock = task.await.unwrap().unwrap();
        assert_eq!(stock.amount, 5);
    }

    #[tokio::test]
    async fn test_product_is_read_through_get() {
        let (inner, mut receiver) = create_mock_client::<CatalogItem>(4);
        let catalog = CatalogClient::new(inner);

        let task = tokio::spawn(async move { catalog.product(ProductId(4)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, ProductId(4));
        let item = CatalogItem {
            product: Product {
                id: ProductId(4),
                title: "Chinelo".to_string(),
                price: 29.9,
                image: String::new(),
            },
            stock: 0,
        };
        responder.send(Ok(Some(item))).unwrap();

        let product = task.await.unwrap().unwrap();
        assert_eq!(product.title, "Chinelo");
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let err = CatalogClient::map_error(FrameworkError::EntityError(Box::new(
            CatalogError::InvalidListing("title is empty".to_string()),
        )));
        assert!(matches!(err, CatalogError::InvalidListing(_)));

        let err = CatalogClient::map_error(FrameworkError::ActorClosed);
        assert!(matches!(err, CatalogError::ActorCommunicationError(_)));
    }

    #[tokio::test]
    async fn test_register_and_restock_against_running_actor() {
        let (actor, inner) = crate::catalog_actor::new();
        let handle = tokio::spawn(actor.run(()));
        let catalog = CatalogClient::new(inner);

        let id = catalog
            .register_product(ProductListing::new("Tenis de Caminhada", 179.9, 3))
            .await
            .unwrap();
        assert_eq!(id, ProductId(1));
        assert_eq!(catalog.stock(id).await.unwrap().amount, 3);

        let item = catalog
            .restock(id, Restock { price: None, stock: Some(7) })
            .await
            .unwrap();
        assert_eq!(item.stock, 7);
        assert_eq!(catalog.product(id).await.unwrap().title, "Tenis de Caminhada");

        let missing = catalog
            .restock(ProductId(40), Restock { price: None, stock: Some(1) })
            .await;
        assert!(matches!(missing, Err(CatalogError::NotFound(ProductId(40)))));

        let invalid = catalog
            .register_product(ProductListing::new("", 10.0, 1))
            .await;
        assert!(matches!(invalid, Err(CatalogError::InvalidListing(_))));

        drop(catalog);
        handle.await.unwrap();
    }
}
