//! App Context

use std::{path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    domain::{
        catalog::{CatalogService, InMemoryCatalogService},
        orders::{InMemoryOrdersService, OrdersService},
    },
    seed::{SeedError, load_products},
    store::{Store, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Wires the in-memory services over a shared store.
    #[must_use]
    pub fn from_store(store: &Store) -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalogService::new(store.clone())),
            orders: Arc::new(InMemoryOrdersService::new(store.clone())),
        }
    }

    /// Loads the catalog seed at `path` into a fresh store.
    ///
    /// # Errors
    ///
    /// Returns an error when the seed cannot be read or names a product twice.
    pub fn from_seed_file(path: &Path) -> Result<Self, AppInitError> {
        let store = Store::with_products(load_products(path)?)?;

        Ok(Self::from_store(&store))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
