//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use shopease::products::{Product, ProductId};

use crate::{domain::catalog::errors::CatalogServiceError, store::Store};

#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    store: Store,
}

impl InMemoryCatalogService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError> {
        let state = self.store.read().await;

        Ok(state.products.values().cloned().collect())
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogServiceError> {
        let state = self.store.read().await;

        state
            .products
            .get(&product)
            .cloned()
            .ok_or(CatalogServiceError::NotFound)
    }

    async fn update_stock(
        &self,
        product: ProductId,
        stock: i64,
    ) -> Result<Product, CatalogServiceError> {
        let units = u32::try_from(stock)
            .map_err(|_out_of_range| CatalogServiceError::InvalidStock(stock))?;

        let mut state = self.store.write().await;

        let record = state
            .products
            .get_mut(&product)
            .ok_or(CatalogServiceError::NotFound)?;

        let previous = record.units_in_stock;

        record.units_in_stock = units;

        info!(product_id = %product, previous, stock = units, "updated product stock");

        Ok(record.clone())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products in ascending id order.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, CatalogServiceError>;

    /// Sets a product's units in stock to `stock`.
    async fn update_stock(
        &self,
        product: ProductId,
        stock: i64,
    ) -> Result<Product, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn list_products_returns_seeded_products_in_id_order() -> TestResult {
        let ctx = TestContext::new();

        let products = ctx.catalog.list_products().await?;
        let ids: Vec<u32> = products.iter().map(|p| p.id.get()).collect();

        assert_eq!(ids, vec![1, 2, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn list_products_empty_when_none_seeded() -> TestResult {
        let catalog = InMemoryCatalogService::new(Store::new());

        assert!(catalog.list_products().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn get_product_returns_seeded_product() -> TestResult {
        let ctx = TestContext::new();

        let product = ctx.catalog.get_product(ProductId::new(1)).await?;

        assert_eq!(product.name, "Product 1");
        assert_eq!(product.unit_price, 18_00);
        assert_eq!(product.units_in_stock, 5);

        Ok(())
    }

    #[tokio::test]
    async fn get_product_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.catalog.get_product(ProductId::new(99)).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_stock_replaces_units_in_stock() -> TestResult {
        let ctx = TestContext::new();

        let updated = ctx.catalog.update_stock(ProductId::new(2), 40).await?;
        let fetched = ctx.catalog.get_product(ProductId::new(2)).await?;

        assert_eq!(updated.units_in_stock, 40);
        assert_eq!(fetched, updated);

        Ok(())
    }

    #[tokio::test]
    async fn update_stock_to_zero_is_allowed() -> TestResult {
        let ctx = TestContext::new();

        let updated = ctx.catalog.update_stock(ProductId::new(2), 0).await?;

        assert_eq!(updated.units_in_stock, 0);

        Ok(())
    }

    #[tokio::test]
    async fn update_stock_rejects_negative_values() -> TestResult {
        let ctx = TestContext::new();

        let result = ctx.catalog.update_stock(ProductId::new(2), -1).await;

        assert!(
            matches!(result, Err(CatalogServiceError::InvalidStock(-1))),
            "expected InvalidStock, got {result:?}"
        );

        let untouched = ctx.catalog.get_product(ProductId::new(2)).await?;

        assert_eq!(untouched.units_in_stock, 17);

        Ok(())
    }

    #[tokio::test]
    async fn update_stock_unknown_id_returns_not_found() {
        let ctx = TestContext::new();

        let result = ctx.catalog.update_stock(ProductId::new(99), 3).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
