use jiff::Timestamp;

use shopease::{
    orders::{NewOrder, OrderLine},
    products::{Product, ProductId},
};

pub(crate) fn product(id: u32, unit_price: u64, units_in_stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        unit_price,
        units_in_stock,
        supplier_name: "Exotic Liquids".to_string(),
    }
}

pub(crate) fn order_line(id: u32, unit_price: u64, quantity: u32) -> OrderLine {
    OrderLine {
        product_id: ProductId::new(id),
        product_name: format!("Product {id}"),
        unit_price,
        quantity,
        total_price: unit_price * u64::from(quantity),
    }
}

pub(crate) fn new_order(order_lines: Vec<OrderLine>) -> NewOrder {
    NewOrder {
        customer_name: "Ada Lovelace".to_string(),
        customer_email: "ada@example.com".to_string(),
        customer_address: "12 St James's Square".to_string(),
        customer_city: "London".to_string(),
        customer_postal_code: "SW1Y 4JH".to_string(),
        total_amount: order_lines.iter().map(|line| line.total_price).sum(),
        order_date: Timestamp::UNIX_EPOCH,
        order_lines,
    }
}
