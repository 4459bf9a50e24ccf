//! Create Order Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use shopease::orders::NewOrder;

use crate::{
    extensions::*,
    observability::record_order_created,
    orders::{
        errors::{into_status_error, invalid_order},
        models::{CreateOrderRequest, OrderResponse},
    },
};

/// Create Order Handler
///
/// Records an order and decrements stock for each of its lines.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid order payload"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.create",
    skip(json, depot, res),
    fields(
        order_id = tracing::field::Empty,
        lines = tracing::field::Empty,
        total_amount = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let order = NewOrder::try_from(json.into_inner()).map_err(|errors| invalid_order(&errors))?;

    let span = tracing::Span::current();

    span.record("lines", order.order_lines.len());
    span.record("total_amount", order.total_amount);

    let order = state
        .orders
        .create_order(order)
        .await
        .map_err(into_status_error)?;

    span.record("order_id", order.id.get());

    record_order_created(order.total_amount);

    res.add_header(LOCATION, format!("/api/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
