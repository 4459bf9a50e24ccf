//! Cart errors.

use thiserror::Error;

use crate::products::ProductId;

/// Reasons a cart operation is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product has no units left.
    #[error("product {0} is out of stock")]
    OutOfStock(ProductId),

    /// Another unit would exceed the product's current stock.
    #[error("only {available} units of product {product} available in stock")]
    StockExceeded {
        /// Product whose line was refused
        product: ProductId,

        /// Units in stock when the check ran
        available: u32,
    },

    /// A restored line breaks `1 <= quantity <= max_quantity`.
    #[error("cart line for product {0} has an invalid quantity")]
    InvalidQuantity(ProductId),

    /// A restored cart holds two lines for one product.
    #[error("cart holds more than one line for product {0}")]
    DuplicateLine(ProductId),
}
