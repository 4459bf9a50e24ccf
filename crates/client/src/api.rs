//! HTTP access to the catalog and the order ledger.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response, header::ACCEPT};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use shopease::{
    api::ErrorBody,
    orders::{NewOrder, Order},
    products::{Product, ProductId},
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
}

/// The server operations the storefront client relies on.
#[automock]
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Retrieves the whole catalog.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Retrieves the current record for one product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ApiError>;

    /// Submits an order to the ledger.
    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError>;

    /// Retrieves every recorded order.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;
}

/// [`StorefrontApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the API at `base_url`; every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Root URL every request path is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await.unwrap_or_default();

    debug!(status = status.as_u16(), body = %body, "api request rejected");

    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string()),
    })
}

/// Summary and field detail of a JSON error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|error| error.to_string())
}

#[async_trait]
impl StorefrontApi for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("api/products").await
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("api/products/{product}")).await
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, ApiError> {
        let response = self
            .client
            .post(self.url("api/orders"))
            .header(ACCEPT, "application/json")
            .json(&order)
            .send()
            .await?;

        read_json(response).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("api/orders").await
    }
}
