//! Product Errors

use salvo::http::StatusError;

use shopease_app::domain::catalog::CatalogServiceError;

pub(crate) fn into_status_error(error: CatalogServiceError) -> StatusError {
    match error {
        CatalogServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        CatalogServiceError::InvalidStock(stock) => StatusError::bad_request()
            .brief("Invalid stock value")
            .detail(format!("stock: must be a non-negative whole number, got {stock}")),
    }
}
