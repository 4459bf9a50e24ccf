//! Checkout Reconciler: turns the cart into a ledger order and reconciles the outcome.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::Timestamp;
use tracing::{info, warn};

use shopease::{
    checkout::{CheckoutError, CheckoutState, prepare_order},
    customer::CustomerInfo,
    orders::Order,
};

use crate::{api::StorefrontApi, session::CartSession};

/// Drives one checkout at a time against the ledger.
pub struct Reconciler {
    api: Arc<dyn StorefrontApi>,
    state: Mutex<CheckoutState>,
}

impl Reconciler {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self {
            api,
            state: Mutex::new(CheckoutState::Idle),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CheckoutState {
        self.lock_state().clone()
    }

    /// Validates, submits and reconciles one order.
    ///
    /// On success the cart is cleared and the state becomes `Confirmed`. A failed submission
    /// leaves the cart untouched and the state `Failed`; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadySubmitting`] while another submission is in flight.
    /// - [`CheckoutError::EmptyCart`] or [`CheckoutError::InvalidCustomer`] before any network
    ///   call; the state is unchanged.
    /// - [`CheckoutError::Submission`] when the ledger call fails.
    pub async fn submit(
        &self,
        session: &mut CartSession,
        customer: &CustomerInfo,
    ) -> Result<Order, CheckoutError> {
        let order = {
            let mut state = self.lock_state();

            if state.is_submitting() {
                return Err(CheckoutError::AlreadySubmitting);
            }

            let order = prepare_order(session.cart(), customer, Timestamp::now())?;

            *state = CheckoutState::Submitting;

            order
        };

        let mut in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        match self.api.create_order(order).await {
            Ok(order) => {
                info!(order_id = %order.id, total_amount = order.total_amount, "order confirmed");

                if let Err(error) = session.clear() {
                    warn!(
                        "order {} confirmed but the cart could not be cleared: {error}",
                        order.id
                    );
                }

                in_flight.settle(CheckoutState::Confirmed {
                    customer: customer.clone(),
                    order: order.clone(),
                });

                Ok(order)
            }
            Err(error) => {
                let message = error.to_string();

                warn!("order submission failed: {message}");

                in_flight.settle(CheckoutState::Failed {
                    message: message.clone(),
                });

                Err(CheckoutError::Submission(message))
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CheckoutState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Moves the state out of `Submitting` even if the submitting future is dropped mid-flight.
struct InFlight<'a> {
    state: &'a Mutex<CheckoutState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, next: CheckoutState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            *self.state.lock().unwrap_or_else(PoisonError::into_inner) = CheckoutState::Failed {
                message: "submission interrupted".to_string(),
            };
        }
    }
}
