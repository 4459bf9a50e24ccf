//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{Cart, CartLine},
    customer::CustomerInfo,
    products::ProductId,
    validation::{ValidationErrors, is_well_formed_email},
};

/// Order identifier, assigned sequentially by the ledger starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// The id given to the first order.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw order id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw order id.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Order Line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Ordered product
    pub product_id: ProductId,

    /// Product name as shown to the customer
    pub product_name: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Units ordered
    pub quantity: u32,

    /// `unit_price * quantity`, in cents
    pub total_price: u64,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            product_name: line.product_name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            total_price: line.line_total(),
        }
    }
}

/// Order payload before the ledger assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_postal_code: String,

    /// Sum of all line totals, in cents
    pub total_amount: u64,

    pub order_date: Timestamp,

    pub order_lines: Vec<OrderLine>,
}

impl NewOrder {
    /// Packages the cart's lines and the customer's details into an order.
    pub fn from_cart(cart: &Cart, customer: &CustomerInfo, order_date: Timestamp) -> Self {
        Self {
            customer_name: customer.full_name(),
            customer_email: customer.email.trim().to_string(),
            customer_address: customer.address.trim().to_string(),
            customer_city: customer.city.trim().to_string(),
            customer_postal_code: customer.postal_code.trim().to_string(),
            total_amount: cart.total(),
            order_date,
            order_lines: cart.lines().iter().map(OrderLine::from).collect(),
        }
    }

    /// Checks customer fields, line arithmetic and the order total.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("customer_name", &self.customer_name, "Customer name is required");

        if !is_well_formed_email(&self.customer_email) {
            errors.push("customer_email", "Invalid email address");
        }

        errors.require("customer_address", &self.customer_address, "Address is required");
        errors.require("customer_city", &self.customer_city, "City is required");
        errors.require(
            "customer_postal_code",
            &self.customer_postal_code,
            "Postal code is required",
        );

        if self.order_lines.is_empty() {
            errors.push("order_lines", "Order must contain at least one line");
        }

        let mut line_sum = 0_u64;

        for (i, line) in self.order_lines.iter().enumerate() {
            errors.require(
                &format!("order_lines[{i}].product_name"),
                &line.product_name,
                "Product name is required",
            );

            if line.quantity == 0 {
                errors.push(
                    format!("order_lines[{i}].quantity"),
                    "Quantity must be at least 1",
                );
            }

            let expected = line.unit_price.checked_mul(u64::from(line.quantity));

            if expected != Some(line.total_price) {
                errors.push(
                    format!("order_lines[{i}].total_price"),
                    "Total price must equal unit price times quantity",
                );
            }

            line_sum = line_sum.saturating_add(line.total_price);
        }

        if line_sum != self.total_amount {
            errors.push(
                "total_amount",
                "Total amount must equal the sum of line totals",
            );
        }

        errors.into_result()
    }

    /// Units requested per product, summed over lines naming the same product.
    pub fn quantities_by_product(&self) -> FxHashMap<ProductId, u64> {
        let mut quantities = FxHashMap::default();

        for line in &self.order_lines {
            *quantities.entry(line.product_id).or_insert(0) += u64::from(line.quantity);
        }

        quantities
    }

    /// Attaches the ledger-assigned id.
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_address: self.customer_address,
            customer_city: self.customer_city,
            customer_postal_code: self.customer_postal_code,
            total_amount: self.total_amount,
            order_date: self.order_date,
            order_lines: self.order_lines,
        }
    }
}

/// Order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_postal_code: String,
    pub total_amount: u64,
    pub order_date: Timestamp,
    pub order_lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{cart::fixtures::product, customer::fixtures::ada};

    use super::*;

    fn cart_with_chai(quantity: u32) -> Result<Cart, crate::cart::CartError> {
        let mut cart = Cart::new();
        let chai = product(1, 18_00, 5);

        for _ in 0..quantity {
            cart.add(&chai)?;
        }

        Ok(cart)
    }

    #[test]
    fn from_cart_copies_lines_and_total() -> TestResult {
        let cart = cart_with_chai(3)?;

        let order = NewOrder::from_cart(&cart, &ada(), Timestamp::UNIX_EPOCH);

        assert_eq!(order.customer_name, "Ada Lovelace");
        assert_eq!(order.total_amount, 54_00);
        assert_eq!(
            order.order_lines,
            vec![OrderLine {
                product_id: ProductId::new(1),
                product_name: "Product 1".to_string(),
                unit_price: 18_00,
                quantity: 3,
                total_price: 54_00,
            }]
        );
        assert!(order.validate().is_ok());

        Ok(())
    }

    #[test]
    fn empty_order_is_invalid() {
        let order = NewOrder::from_cart(&Cart::new(), &ada(), Timestamp::UNIX_EPOCH);

        let errors = order.validate().err().unwrap_or_default();

        assert!(errors.contains("order_lines"));
    }

    #[test]
    fn mismatched_line_total_is_invalid() -> TestResult {
        let mut order = NewOrder::from_cart(&cart_with_chai(2)?, &ada(), Timestamp::UNIX_EPOCH);

        for line in &mut order.order_lines {
            line.total_price = 1;
        }

        let errors = order.validate().err().unwrap_or_default();

        assert!(errors.contains("order_lines[0].total_price"));
        assert!(errors.contains("total_amount"));

        Ok(())
    }

    #[test]
    fn zero_quantity_line_is_invalid() -> TestResult {
        let mut order = NewOrder::from_cart(&cart_with_chai(1)?, &ada(), Timestamp::UNIX_EPOCH);

        order.order_lines = order
            .order_lines
            .into_iter()
            .map(|line| OrderLine {
                quantity: 0,
                total_price: 0,
                ..line
            })
            .collect();
        order.total_amount = 0;

        let errors = order.validate().err().unwrap_or_default();

        assert!(errors.contains("order_lines[0].quantity"));
        assert_eq!(errors.len(), 1, "unexpected errors: {errors}");

        Ok(())
    }

    #[test]
    fn quantities_are_summed_per_product() -> TestResult {
        let mut order = NewOrder::from_cart(&cart_with_chai(2)?, &ada(), Timestamp::UNIX_EPOCH);
        let duplicate = order.order_lines.clone();

        order.order_lines.extend(duplicate);

        assert_eq!(
            order.quantities_by_product().get(&ProductId::new(1)),
            Some(&4)
        );

        Ok(())
    }

    #[test]
    fn order_ids_count_up_from_one() {
        assert_eq!(OrderId::FIRST.get(), 1);
        assert_eq!(OrderId::FIRST.next(), OrderId::new(2));
    }

    #[test]
    fn order_date_serializes_as_rfc3339() -> TestResult {
        let order = NewOrder::from_cart(&cart_with_chai(1)?, &ada(), Timestamp::UNIX_EPOCH)
            .into_order(OrderId::FIRST);

        let json = serde_json::to_value(&order)?;

        assert_eq!(json["order_date"], "1970-01-01T00:00:00Z");
        assert_eq!(json["id"], 1);

        Ok(())
    }
}
