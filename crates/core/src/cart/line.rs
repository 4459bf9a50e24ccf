//! Cart Lines

use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// One product's entry in the cart.
///
/// `max_quantity` is the product's stock as last seen by the cart. It is a cache: it is
/// refreshed whenever the cart consults the catalog and is never authoritative at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line is for
    pub product_id: ProductId,

    /// Product name at the time it was added
    pub product_name: String,

    /// Unit price in cents at the time it was added
    pub unit_price: u64,

    /// Units in the cart, at least one
    pub quantity: u32,

    /// Supplying company
    pub supplier_name: String,

    /// Stock ceiling from the last catalog sync
    pub max_quantity: u32,
}

impl CartLine {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            supplier_name: product.supplier_name.clone(),
            max_quantity: product.units_in_stock,
        }
    }

    /// `unit_price * quantity`
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    pub(crate) fn has_valid_quantity(&self) -> bool {
        (1..=self.max_quantity).contains(&self.quantity)
    }
}
