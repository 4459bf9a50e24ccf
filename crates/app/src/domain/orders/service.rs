//! Order ledger service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};

use shopease::{
    orders::{NewOrder, Order},
    products::ProductId,
};

use crate::{domain::orders::errors::OrdersServiceError, store::Store};

#[derive(Debug, Clone)]
pub struct InMemoryOrdersService {
    store: Store,
}

impl InMemoryOrdersService {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrdersService for InMemoryOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        order.validate().map_err(OrdersServiceError::Invalid)?;

        let mut requested: Vec<(ProductId, u64)> =
            order.quantities_by_product().into_iter().collect();

        requested.sort_unstable_by_key(|(product, _)| *product);

        let mut guard = self.store.write().await;
        let state = &mut *guard;

        let mut remaining = Vec::with_capacity(requested.len());

        for (product, quantity) in requested {
            let record = state
                .products
                .get(&product)
                .ok_or(OrdersServiceError::UnknownProduct(product))?;

            let available = record.units_in_stock;

            let left = u64::from(available)
                .checked_sub(quantity)
                .and_then(|left| u32::try_from(left).ok());

            let Some(left) = left else {
                warn!(
                    product_id = %product,
                    requested = quantity,
                    available,
                    "rejected order with insufficient stock"
                );

                return Err(OrdersServiceError::InsufficientStock {
                    product,
                    requested: quantity,
                    available,
                });
            };

            remaining.push((product, left));
        }

        for (product, left) in remaining {
            if let Some(record) = state.products.get_mut(&product) {
                record.units_in_stock = left;
            }
        }

        let id = state.next_order_id;

        state.next_order_id = id.next();

        let order = order.into_order(id);

        state.orders.push(order.clone());

        info!(
            order_id = %order.id,
            lines = order.order_lines.len(),
            total_amount = order.total_amount,
            "recorded order"
        );

        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let state = self.store.read().await;

        Ok(state.orders.clone())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates an order, decrements stock for every line and appends it to the ledger.
    ///
    /// Either every stock decrement and the append happen, or none of them do.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieves all recorded orders in creation order.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;
}
