//! The active cart, restored from and written back to client-local storage.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use shopease::{
    cart::{
        Cart, CartChange, CartError,
        storage::{CartStorage, StorageError, load_cart, save_cart},
    },
    products::{Product, ProductId},
};

use crate::api::{ApiError, StorefrontApi};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("failed to save cart: {0}")]
    Storage(#[from] StorageError),

    /// The authoritative product record could not be fetched; the cart is unchanged.
    #[error("failed to look up product {product}: {source}")]
    Lookup {
        product: ProductId,

        #[source]
        source: ApiError,
    },
}

/// Cart State for one client: every successful mutation is persisted before returning.
pub struct CartSession {
    cart: Cart,
    storage: Arc<dyn CartStorage>,
}

impl CartSession {
    /// Restores the stored cart, or starts empty when nothing usable is stored.
    pub fn open(storage: Arc<dyn CartStorage>) -> Self {
        let cart = load_cart(storage.as_ref());

        debug!(lines = cart.len(), "restored cart");

        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one unit of `product`.
    ///
    /// # Errors
    ///
    /// Returns an error when stock does not allow another unit or the cart cannot be saved.
    pub fn add(&mut self, product: &Product) -> Result<CartChange, SessionError> {
        let change = self.cart.add(product)?;

        self.persist()?;

        Ok(change)
    }

    /// Adds one unit to an existing line after re-reading the product's stock from the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the lookup fails, stock does not allow another unit, or the cart
    /// cannot be saved. The cart is unchanged in every error case but the last.
    pub async fn increment(
        &mut self,
        product: ProductId,
        api: &dyn StorefrontApi,
    ) -> Result<CartChange, SessionError> {
        if self.cart.line(product).is_none() {
            return Ok(CartChange::Unchanged);
        }

        let current = api
            .get_product(product)
            .await
            .map_err(|source| SessionError::Lookup { product, source })?;

        let change = self.cart.increment(&current)?;

        self.persist_if_changed(change)?;

        Ok(change)
    }

    /// Removes one unit; a line at quantity 1 is removed entirely.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart cannot be saved.
    pub fn decrement(&mut self, product: ProductId) -> Result<CartChange, SessionError> {
        let change = self.cart.decrement(product);

        self.persist_if_changed(change)?;

        Ok(change)
    }

    /// Removes a line regardless of quantity.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart cannot be saved.
    pub fn remove(&mut self, product: ProductId) -> Result<CartChange, SessionError> {
        let change = self.cart.remove(product);

        self.persist_if_changed(change)?;

        Ok(change)
    }

    /// Empties the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the cart cannot be saved.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.cart.clear();

        self.persist()?;

        info!("cleared cart");

        Ok(())
    }

    fn persist_if_changed(&self, change: CartChange) -> Result<(), SessionError> {
        if change == CartChange::Unchanged {
            return Ok(());
        }

        self.persist()
    }

    fn persist(&self) -> Result<(), SessionError> {
        save_cart(self.storage.as_ref(), &self.cart)?;

        Ok(())
    }
}

impl std::fmt::Debug for CartSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSession")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use testresult::TestResult;

    use shopease::cart::storage::MemoryStorage;

    use crate::api::MockStorefrontApi;

    use super::*;

    fn product(id: u32, unit_price: u64, units_in_stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price,
            units_in_stock,
            supplier_name: "Exotic Liquids".to_string(),
        }
    }

    fn strict_api() -> MockStorefrontApi {
        let mut api = MockStorefrontApi::new();

        api.expect_list_products().never();
        api.expect_create_order().never();
        api.expect_list_orders().never();

        api
    }

    #[test]
    fn mutations_are_visible_to_a_reopened_session() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(Arc::clone(&storage));

        session.add(&product(1, 18_00, 5))?;
        session.add(&product(1, 18_00, 5))?;
        session.add(&product(3, 10_00, 13))?;

        let reopened = CartSession::open(storage);

        assert_eq!(reopened.cart(), session.cart());
        assert_eq!(reopened.cart().total(), 46_00);

        Ok(())
    }

    #[test]
    fn decrement_at_one_removes_and_persists() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(Arc::clone(&storage));

        session.add(&product(1, 18_00, 5))?;

        assert_eq!(session.decrement(ProductId::new(1))?, CartChange::Removed);
        assert!(CartSession::open(storage).cart().is_empty());

        Ok(())
    }

    #[test]
    fn refused_add_leaves_stored_cart_alone() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(Arc::clone(&storage));

        let result = session.add(&product(5, 21_35, 0));

        assert!(
            matches!(result, Err(SessionError::Cart(CartError::OutOfStock(_)))),
            "expected OutOfStock, got {result:?}"
        );
        assert!(storage.read(shopease::cart::storage::CART_STORAGE_KEY)?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn increment_uses_current_stock() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(storage);

        session.add(&product(1, 18_00, 5))?;
        session.add(&product(1, 18_00, 5))?;
        session.add(&product(1, 18_00, 5))?;

        let mut api = strict_api();

        api.expect_get_product()
            .once()
            .with(eq(ProductId::new(1)))
            .return_once(|_| Ok(product(1, 18_00, 3)));

        let result = session.increment(ProductId::new(1), &api).await;

        assert!(
            matches!(
                result,
                Err(SessionError::Cart(CartError::StockExceeded { available: 3, .. }))
            ),
            "expected StockExceeded, got {result:?}"
        );
        assert_eq!(session.cart().line(ProductId::new(1)).map(|l| l.quantity), Some(3));

        Ok(())
    }

    #[tokio::test]
    async fn increment_failed_lookup_leaves_cart_unchanged() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(storage);

        session.add(&product(1, 18_00, 5))?;

        let mut api = strict_api();

        api.expect_get_product().once().return_once(|_| {
            Err(ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });

        let before = session.cart().clone();
        let result = session.increment(ProductId::new(1), &api).await;

        assert!(
            matches!(result, Err(SessionError::Lookup { .. })),
            "expected Lookup error, got {result:?}"
        );
        assert_eq!(session.cart(), &before);

        Ok(())
    }

    #[tokio::test]
    async fn increment_absent_line_skips_lookup() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(storage);

        let mut api = strict_api();
        api.expect_get_product().never();

        assert_eq!(
            session.increment(ProductId::new(9), &api).await?,
            CartChange::Unchanged
        );

        Ok(())
    }

    #[test]
    fn clear_persists_an_empty_cart() -> TestResult {
        let storage: Arc<dyn CartStorage> = Arc::new(MemoryStorage::new());
        let mut session = CartSession::open(Arc::clone(&storage));

        session.add(&product(1, 18_00, 5))?;
        session.clear()?;

        assert!(CartSession::open(storage).cart().is_empty());

        Ok(())
    }
}
