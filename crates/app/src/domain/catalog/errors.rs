//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("product not found")]
    NotFound,

    /// Stock must be a non-negative whole number that fits the stock counter.
    #[error("invalid stock value {0}")]
    InvalidStock(i64),
}
