//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopease::products::{Product, ProductId};
use shopease_app::{
    context::AppContext,
    domain::{catalog::MockCatalogService, orders::MockOrdersService},
};

use crate::{errors::catcher, state::State};

pub(crate) fn make_product(id: u32, unit_price: u64, units_in_stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        unit_price,
        units_in_stock,
        supplier_name: "Exotic Liquids".to_string(),
    }
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_get_product().never();
    catalog.expect_update_stock().never();

    catalog
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_list_orders().never();

    orders
}

pub(crate) fn app_service(
    catalog: MockCatalogService,
    orders: MockOrdersService,
    route: Router,
) -> Service {
    service_with(
        AppContext {
            catalog: Arc::new(catalog),
            orders: Arc::new(orders),
        },
        route,
    )
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service_with(
        AppContext {
            catalog: Arc::new(catalog),
            orders: Arc::new(strict_orders_mock()),
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_with(
        AppContext {
            catalog: Arc::new(strict_catalog_mock()),
            orders: Arc::new(orders),
        },
        route,
    )
}
