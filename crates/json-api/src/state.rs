//! Shared handler state.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use shopease_app::{
    context::AppContext,
    domain::{catalog::CatalogService, orders::OrdersService},
};

/// The catalog and the ledger, both backed by one store.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn CatalogService>,
    pub(crate) orders: Arc<dyn OrdersService>,
}

impl State {
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        let AppContext { catalog, orders } = app;

        Arc::new(Self { catalog, orders })
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("State").finish_non_exhaustive()
    }
}
