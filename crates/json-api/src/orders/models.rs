//! Order request and response bodies.

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use shopease::{
    orders::{NewOrder, Order, OrderLine},
    products::ProductId,
    validation::ValidationErrors,
};

/// Order Line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineBody {
    /// Ordered product id
    pub product_id: u32,

    /// Product name at the time of ordering
    pub product_name: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Units ordered
    pub quantity: u32,

    /// `unit_price * quantity` in cents
    pub total_price: u64,
}

impl From<OrderLineBody> for OrderLine {
    fn from(line: OrderLineBody) -> Self {
        OrderLine {
            product_id: ProductId::new(line.product_id),
            product_name: line.product_name,
            unit_price: line.unit_price,
            quantity: line.quantity,
            total_price: line.total_price,
        }
    }
}

impl From<OrderLine> for OrderLineBody {
    fn from(line: OrderLine) -> Self {
        OrderLineBody {
            product_id: line.product_id.get(),
            product_name: line.product_name,
            unit_price: line.unit_price,
            quantity: line.quantity,
            total_price: line.total_price,
        }
    }
}

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_postal_code: String,

    /// Sum of line totals in cents
    pub total_amount: u64,

    /// RFC 3339 timestamp
    pub order_date: String,

    pub order_lines: Vec<OrderLineBody>,
}

impl TryFrom<CreateOrderRequest> for NewOrder {
    type Error = ValidationErrors;

    fn try_from(request: CreateOrderRequest) -> Result<Self, Self::Error> {
        let order_date = request.order_date.parse::<Timestamp>().map_err(|source| {
            let mut errors = ValidationErrors::new();
            errors.push("order_date", format!("Invalid timestamp: {source}"));
            errors
        })?;

        let order = NewOrder {
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_address: request.customer_address,
            customer_city: request.customer_city,
            customer_postal_code: request.customer_postal_code,
            total_amount: request.total_amount,
            order_date,
            order_lines: request.order_lines.into_iter().map(Into::into).collect(),
        };

        order.validate()?;

        Ok(order)
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Ledger-assigned order id
    pub id: u64,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_postal_code: String,
    pub total_amount: u64,
    pub order_date: String,
    pub order_lines: Vec<OrderLineBody>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.get(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_address: order.customer_address,
            customer_city: order.customer_city,
            customer_postal_code: order.customer_postal_code,
            total_amount: order.total_amount,
            order_date: order.order_date.to_string(),
            order_lines: order.order_lines.into_iter().map(Into::into).collect(),
        }
    }
}
