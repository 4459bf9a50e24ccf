//! Money display helpers.
//!
//! Amounts are carried as integer cents everywhere; these helpers only render them.

use rusty_money::{Money, iso};

/// Formats an amount of cents as US dollars, e.g. `1800` as `$18.00`.
pub fn format_cents(amount: u64) -> String {
    match i64::try_from(amount) {
        Ok(minor) => Money::from_minor(minor, iso::USD).to_string(),
        Err(_overflow) => format!("{amount} cents"),
    }
}
