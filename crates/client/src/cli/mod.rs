use std::sync::Arc;

use clap::{Parser, Subcommand};

use shopease::cart::storage::{CartStorage, FileStorage};
use shopease_client::{
    api::{ApiClient, ApiError},
    config::ClientConfig,
    session::CartSession,
};

mod cart;
mod checkout;
mod orders;
mod products;

#[derive(Debug, Parser)]
#[command(name = "shopease", about = "ShopEase storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the catalog
    Products,

    /// Inspect or change the cart
    Cart(cart::CartCommand),

    /// Submit the cart as an order
    Checkout(checkout::CheckoutArgs),

    /// List recorded orders
    Orders,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let api = ApiClient::new(&self.config.api_url, self.config.timeout())
            .map_err(|error| format!("failed to build HTTP client: {error}"))?;

        match self.command {
            Commands::Products => products::run(&api).await,
            Commands::Cart(command) => {
                cart::run(command, &mut open_session(&self.config), &api).await
            }
            Commands::Checkout(args) => {
                checkout::run(args, &mut open_session(&self.config), Arc::new(api)).await
            }
            Commands::Orders => orders::run(&api).await,
        }
    }
}

fn open_session(config: &ClientConfig) -> CartSession {
    let storage: Arc<dyn CartStorage> = Arc::new(FileStorage::new(&config.data_dir));

    CartSession::open(storage)
}

/// Failure text for an API call; transport failures name the server that was tried.
fn api_failure(api: &ApiClient, action: &str, error: &ApiError) -> String {
    match error {
        ApiError::Http(_) => format!("{action}: {error} (server {})", api.base_url()),
        ApiError::Status { .. } => format!("{action}: {error}"),
    }
}
