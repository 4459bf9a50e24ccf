use shopease::money::format_cents;
use shopease_client::api::{ApiClient, StorefrontApi};

pub(crate) async fn run(api: &ApiClient) -> Result<(), String> {
    let orders = api
        .list_orders()
        .await
        .map_err(|error| super::api_failure(api, "failed to fetch orders", &error))?;

    if orders.is_empty() {
        println!("no orders recorded");
        return Ok(());
    }

    for order in orders {
        println!("order_id: {}", order.id);
        println!("customer: {} <{}>", order.customer_name, order.customer_email);
        println!("order_date: {}", order.order_date);
        println!("lines: {}", order.order_lines.len());
        println!("total: {}", format_cents(order.total_amount));
        println!();
    }

    Ok(())
}
