use clap::{Args, Subcommand};

use shopease::{cart::CartChange, money::format_cents, products::ProductId};
use shopease_client::{
    api::{ApiClient, StorefrontApi},
    session::CartSession,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its total
    Show,

    /// Add one unit of a product
    Add(ProductArg),

    /// Add one unit to a line, checking current stock
    Inc(ProductArg),

    /// Remove one unit from a line
    Dec(ProductArg),

    /// Remove a line entirely
    Remove(ProductArg),

    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
struct ProductArg {
    /// Product id
    id: ProductId,
}

pub(crate) async fn run(
    command: CartCommand,
    session: &mut CartSession,
    api: &ApiClient,
) -> Result<(), String> {
    let change = match command.command {
        CartSubcommand::Show => None,
        CartSubcommand::Add(ProductArg { id }) => {
            let product = api
                .get_product(id)
                .await
                .map_err(|error| {
                    super::api_failure(api, &format!("failed to fetch product {id}"), &error)
                })?;

            Some(session.add(&product).map_err(|error| error.to_string())?)
        }
        CartSubcommand::Inc(ProductArg { id }) => Some(
            session
                .increment(id, api)
                .await
                .map_err(|error| error.to_string())?,
        ),
        CartSubcommand::Dec(ProductArg { id }) => {
            Some(session.decrement(id).map_err(|error| error.to_string())?)
        }
        CartSubcommand::Remove(ProductArg { id }) => {
            Some(session.remove(id).map_err(|error| error.to_string())?)
        }
        CartSubcommand::Clear => {
            session.clear().map_err(|error| error.to_string())?;

            Some(CartChange::Removed)
        }
    };

    if change == Some(CartChange::Unchanged) {
        println!("cart unchanged");
    }

    print_cart(session);

    Ok(())
}

pub(crate) fn print_cart(session: &CartSession) {
    let cart = session.cart();

    if cart.is_empty() {
        println!("cart is empty");
        return;
    }

    for line in cart.lines() {
        println!(
            "{:>4}  {:<40} {:>3} x {:>10} = {:>10}",
            line.product_id,
            line.product_name,
            line.quantity,
            format_cents(line.unit_price),
            format_cents(line.line_total())
        );
    }

    println!("items: {}", cart.item_count());
    println!("total: {}", format_cents(cart.total()));
}
