//! Order ledger errors.

use thiserror::Error;

use shopease::{products::ProductId, validation::ValidationErrors};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    /// The payload failed field validation; nothing was recorded.
    #[error("invalid order: {0}")]
    Invalid(#[source] ValidationErrors),

    /// An order line names a product the catalog does not hold.
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),

    /// An order line asks for more units than are in stock.
    #[error(
        "insufficient stock for product {product}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        /// Product that ran short
        product: ProductId,

        /// Units requested across all lines naming the product
        requested: u64,

        /// Units in stock when the order was checked
        available: u32,
    },
}
