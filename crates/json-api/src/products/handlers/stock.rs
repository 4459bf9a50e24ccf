//! Update Product Stock Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopease::products::ProductId;

use crate::{extensions::*, products::errors::into_status_error, products::get::ProductResponse};

/// Update Stock Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStockRequest {
    /// New units in stock; must not be negative
    pub stock: i64,
}

/// Update Product Stock Handler
///
/// Replaces a product's units in stock.
#[endpoint(
    tags("products"),
    summary = "Update Product Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "products.stock.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty, stock = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<u32>,
    json: JsonBody<UpdateStockRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let product = ProductId::new(id.into_inner());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("stock", request.stock);

    let product = state
        .catalog
        .update_stock(product, request.stock)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
