use std::sync::Arc;

use clap::Args;

use shopease::{customer::CustomerInfo, money::format_cents};
use shopease_client::{
    api::{ApiClient, StorefrontApi},
    checkout::Reconciler,
    session::CartSession,
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Given name
    #[arg(long)]
    first_name: String,

    /// Family name
    #[arg(long)]
    last_name: String,

    /// Contact email
    #[arg(long)]
    email: String,

    /// Street address
    #[arg(long)]
    address: String,

    /// City
    #[arg(long)]
    city: String,

    /// Postal or ZIP code
    #[arg(long)]
    postal_code: String,
}

impl From<CheckoutArgs> for CustomerInfo {
    fn from(args: CheckoutArgs) -> Self {
        CustomerInfo {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            address: args.address,
            city: args.city,
            postal_code: args.postal_code,
        }
    }
}

pub(crate) async fn run(
    args: CheckoutArgs,
    session: &mut CartSession,
    api: Arc<ApiClient>,
) -> Result<(), String> {
    let customer = CustomerInfo::from(args);
    let reconciler = Reconciler::new(api as Arc<dyn StorefrontApi>);

    let order = reconciler
        .submit(session, &customer)
        .await
        .map_err(|error| format!("checkout failed: {error}"))?;

    println!("order {} confirmed for {}", order.id, order.customer_name);

    for line in &order.order_lines {
        println!(
            "  {} x {} = {}",
            line.quantity,
            line.product_name,
            format_cents(line.total_price)
        );
    }

    println!("total: {}", format_cents(order.total_amount));
    println!("a confirmation will be sent to {}", customer.email);

    Ok(())
}
