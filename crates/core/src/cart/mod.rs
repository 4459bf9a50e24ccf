//! Shopping Cart
//!
//! The cart is owned by the client session. Every operation either applies completely or
//! leaves the cart untouched, and every line keeps `1 <= quantity <= max_quantity`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

mod errors;
mod line;
pub mod storage;

pub use errors::CartError;
pub use line::CartLine;

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was created with quantity 1.
    Added,

    /// An existing line now has this quantity.
    QuantityChanged(u32),

    /// The line was removed.
    Removed,

    /// Nothing matched; the cart is unchanged.
    Unchanged,
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product`, if any.
    pub fn line(&self, product: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product)
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product)
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, in cents.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Adds one unit of `product`.
    ///
    /// An existing line is incremented when stock allows and its ceiling refreshed from
    /// `product`; otherwise a new line is created with quantity 1.
    ///
    /// # Errors
    ///
    /// - [`CartError::OutOfStock`] when a new line is requested for a product with no stock.
    /// - [`CartError::StockExceeded`] when the existing line already holds every unit in stock.
    pub fn add(&mut self, product: &Product) -> Result<CartChange, CartError> {
        if let Some(line) = self.line_mut(product.id) {
            return bump(line, product);
        }

        if !product.is_in_stock() {
            return Err(CartError::OutOfStock(product.id));
        }

        self.lines.push(CartLine::from_product(product));

        Ok(CartChange::Added)
    }

    /// Adds one unit to an existing line, checked against `current`, the product as freshly
    /// read from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::StockExceeded`] when the line already holds every unit in stock.
    pub fn increment(&mut self, current: &Product) -> Result<CartChange, CartError> {
        match self.line_mut(current.id) {
            Some(line) => bump(line, current),
            None => Ok(CartChange::Unchanged),
        }
    }

    /// Takes one unit off a line, removing the line when it would reach zero.
    pub fn decrement(&mut self, product: ProductId) -> CartChange {
        let Some(line) = self.line_mut(product) else {
            return CartChange::Unchanged;
        };

        if line.quantity > 1 {
            line.quantity -= 1;

            return CartChange::QuantityChanged(line.quantity);
        }

        self.remove(product)
    }

    /// Removes the line for `product`. Removing an absent line is not an error.
    pub fn remove(&mut self, product: ProductId) -> CartChange {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id != product);

        if self.lines.len() == before {
            CartChange::Unchanged
        } else {
            CartChange::Removed
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

fn bump(line: &mut CartLine, product: &Product) -> Result<CartChange, CartError> {
    if line.quantity >= product.units_in_stock {
        return Err(CartError::StockExceeded {
            product: product.id,
            available: product.units_in_stock,
        });
    }

    line.quantity += 1;
    line.max_quantity = product.units_in_stock;

    Ok(CartChange::QuantityChanged(line.quantity))
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();

        for line in &lines {
            if !line.has_valid_quantity() {
                return Err(CartError::InvalidQuantity(line.product_id));
            }

            if !seen.insert(line.product_id) {
                return Err(CartError::DuplicateLine(line.product_id));
            }
        }

        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
