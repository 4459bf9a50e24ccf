//! App Router

use salvo::{
    Router,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
};

use crate::{healthcheck, observability, orders, products};

/// API routes under `/api`.
pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .push(Router::with_path("stock").patch(products::stock::handler)),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler),
        )
}

/// Full route tree: API, health, metrics and generated docs.
pub(crate) fn app_router() -> Router {
    let router = Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api_router());

    let doc = OpenApi::new("ShopEase API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}
