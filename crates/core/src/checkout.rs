//! Checkout state and order preparation.
//!
//! The asynchronous submission itself lives with whoever owns the ledger connection; this
//! module holds the states it moves through and the checks that run before anything is sent.

use jiff::Timestamp;
use thiserror::Error;

use crate::{
    cart::Cart,
    customer::CustomerInfo,
    orders::{NewOrder, Order},
    validation::ValidationErrors,
};

/// Where a checkout currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nothing in flight.
    #[default]
    Idle,

    /// An order has been sent and its outcome is pending.
    Submitting,

    /// The ledger accepted the order and the cart was cleared.
    Confirmed {
        /// Details the customer entered
        customer: CustomerInfo,

        /// The order as recorded by the ledger
        order: Order,
    },

    /// The submission failed; the cart was left as it was.
    Failed {
        /// What went wrong, for display
        message: String,
    },
}

impl CheckoutState {
    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Reasons a checkout does not produce an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The customer form is incomplete or malformed.
    #[error("invalid customer details: {0}")]
    InvalidCustomer(#[source] ValidationErrors),

    /// A previous submission has not finished yet.
    #[error("an order is already being submitted")]
    AlreadySubmitting,

    /// The ledger call failed after validation passed. Retrying is up to the user.
    #[error("failed to submit order: {0}")]
    Submission(String),
}

/// Runs the pre-submission checks and builds the order payload.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`] when the cart has no lines.
/// - [`CheckoutError::InvalidCustomer`] when any customer field fails validation.
pub fn prepare_order(
    cart: &Cart,
    customer: &CustomerInfo,
    now: Timestamp,
) -> Result<NewOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    customer.validate().map_err(CheckoutError::InvalidCustomer)?;

    Ok(NewOrder::from_cart(cart, customer, now))
}
