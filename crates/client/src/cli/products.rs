use shopease::money::format_cents;
use shopease_client::api::{ApiClient, StorefrontApi};

pub(crate) async fn run(api: &ApiClient) -> Result<(), String> {
    let products = api
        .list_products()
        .await
        .map_err(|error| super::api_failure(api, "failed to fetch products", &error))?;

    if products.is_empty() {
        println!("no products available");
        return Ok(());
    }

    for product in products {
        let stock = if product.is_in_stock() {
            format!("{} in stock", product.units_in_stock)
        } else {
            "out of stock".to_string()
        };

        println!(
            "{:>4}  {:<40} {:>10}  {:<14} {}",
            product.id,
            product.name,
            format_cents(product.unit_price),
            stock,
            product.supplier_name
        );
    }

    Ok(())
}
