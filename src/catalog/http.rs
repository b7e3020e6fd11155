//! # HTTP Catalog
//!
//! [`Catalog`] over the storefront REST API.

use super::{Catalog, CatalogError};
use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Reads products and stock from `{base_url}/products/{id}` and `{base_url}/stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a catalog with no request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize(base_url.into()),
        }
    }

    /// Creates a catalog whose requests give up after `timeout`, when set.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: normalize(base_url.into()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.fetch(&format!("products/{id}")).await
    }

    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.fetch(&format!("stock/{id}")).await
    }
}

fn normalize(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_dropped() {
        let catalog = HttpCatalog::new("http://localhost:3333///");
        assert_eq!(catalog.base_url(), "http://localhost:3333");
    }

    #[test]
    fn test_timeout_is_optional() {
        let catalog = HttpCatalog::with_timeout("http://shop.test/api/", None).unwrap();
        assert_eq!(catalog.base_url(), "http://shop.test/api");
        let timed = HttpCatalog::with_timeout("http://shop.test", Some(Duration::from_secs(2)));
        assert!(timed.is_ok());
    }
}
