//! Order Errors

use salvo::http::StatusError;
use tracing::warn;

use shopease::validation::ValidationErrors;
use shopease_app::domain::orders::OrdersServiceError;

use crate::{
    errors::field_detail,
    observability::{OrderRejection, record_order_rejected},
};

pub(crate) fn invalid_order(errors: &ValidationErrors) -> StatusError {
    record_order_rejected(OrderRejection::Invalid);

    StatusError::bad_request()
        .brief("Invalid order payload")
        .detail(field_detail(errors))
}

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Invalid(errors) => invalid_order(&errors),
        OrdersServiceError::UnknownProduct(product) => {
            record_order_rejected(OrderRejection::UnknownProduct);

            StatusError::not_found().brief(format!("Product {product} not found"))
        }
        OrdersServiceError::InsufficientStock {
            product,
            requested,
            available,
        } => {
            warn!(product_id = %product, requested, available, "order exceeds stock");
            record_order_rejected(OrderRejection::InsufficientStock);

            StatusError::conflict()
                .brief("Insufficient stock")
                .detail(format!(
                    "product_id {product}: requested {requested}, available {available}"
                ))
        }
    }
}
