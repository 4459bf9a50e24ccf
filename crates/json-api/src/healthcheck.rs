//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Liveness plus the size of the in-memory catalog and ledger
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` when the handler answers
    pub status: String,

    pub products: usize,

    pub orders: usize,
}

/// Healthcheck handler
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let products = state
        .catalog
        .list_products()
        .await
        .or_500("failed to read catalog")?;

    let orders = state
        .orders
        .list_orders()
        .await
        .or_500("failed to read orders")?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        products: products.len(),
        orders: orders.len(),
    }))
}
