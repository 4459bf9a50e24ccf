//! Order Index Handler

use salvo::prelude::*;

use crate::{extensions::*, orders::models::OrderResponse};

/// Order Index Handler
///
/// Returns every recorded order in creation order.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<OrderResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let orders = state
        .orders
        .list_orders()
        .await
        .or_500("failed to fetch orders")?;

    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use shopease::orders::{NewOrder, OrderId};
    use shopease_app::domain::orders::MockOrdersService;

    use crate::test_helpers::orders_service;

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("api/orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().once().return_once(|| {
            let order = NewOrder {
                customer_name: "Ada Lovelace".to_string(),
                customer_email: "ada@example.com".to_string(),
                customer_address: "12 St James's Square".to_string(),
                customer_city: "London".to_string(),
                customer_postal_code: "SW1Y 4JH".to_string(),
                total_amount: 0,
                order_date: Timestamp::UNIX_EPOCH,
                order_lines: vec![],
            };

            Ok(vec![order.into_order(OrderId::FIRST)])
        });

        orders.expect_create_order().never();

        let response: Vec<OrderResponse> = TestClient::get("http://example.com/api/orders")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.len(), 1);
        assert_eq!(response.first().map(|o| o.id), Some(1));
        assert_eq!(
            response.first().map(|o| o.order_date.as_str()),
            Some("1970-01-01T00:00:00Z")
        );

        Ok(())
    }
}
