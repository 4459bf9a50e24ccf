//! In-memory store shared by the catalog and the order ledger.
//!
//! Every stock mutation and every order append happens under the single write lock, so a
//! read-check-write sequence against stock is never interleaved with another.

use std::{collections::BTreeMap, sync::Arc};

use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shopease::{
    orders::{Order, OrderId},
    products::{Product, ProductId},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product {0} appears more than once in the catalog")]
    DuplicateProduct(ProductId),
}

#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) products: BTreeMap<ProductId, Product>,
    pub(crate) orders: Vec<Order>,
    pub(crate) next_order_id: OrderId,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            orders: Vec::new(),
            next_order_id: OrderId::FIRST,
        }
    }
}

/// Handle to the store. Cloning shares the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<RwLock<StoreState>>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `products` and no orders.
    ///
    /// # Errors
    ///
    /// Returns an error when two products share an id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, StoreError> {
        let mut state = StoreState::default();

        for product in products {
            let id = product.id;

            if state.products.insert(id, product).is_some() {
                return Err(StoreError::DuplicateProduct(id));
            }
        }

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}
