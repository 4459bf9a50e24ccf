//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use shopease::products::{Product, ProductId};

use crate::{extensions::*, products::errors::into_status_error};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// The price of one unit in cents
    pub unit_price: u64,

    /// Units currently available
    pub units_in_stock: u32,

    /// Supplier display name
    pub supplier_name: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.get(),
            name: product.name,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            supplier_name: product.supplier_name,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Product id is not an integer"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let product = state
        .catalog
        .get_product(ProductId::new(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopease_app::domain::catalog::{CatalogServiceError, MockCatalogService};

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("api/products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .withf(|id| *id == ProductId::new(1))
            .return_once(|_| Ok(make_product(1, 18_00, 39)));

        catalog.expect_list_products().never();
        catalog.expect_update_stock().never();

        let mut res = TestClient::get("http://example.com/api/products/1")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, 1);
        assert_eq!(body.unit_price, 18_00);
        assert_eq!(body.units_in_stock, 39);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_get_product()
            .once()
            .return_once(|_| Err(CatalogServiceError::NotFound));

        catalog.expect_list_products().never();
        catalog.expect_update_stock().never();

        let res = TestClient::get("http://example.com/api/products/99")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_non_integer_id_returns_400() {
        let mut catalog = MockCatalogService::new();

        catalog.expect_get_product().never();
        catalog.expect_list_products().never();
        catalog.expect_update_stock().never();

        let res = TestClient::get("http://example.com/api/products/chai")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
