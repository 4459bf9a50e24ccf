//! Products

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw product id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw product id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Units currently available
    pub units_in_stock: u32,

    /// Name of the supplying company
    pub supplier_name: String,
}

impl Product {
    /// Whether at least one unit can be sold.
    pub fn is_in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}
