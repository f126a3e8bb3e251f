//! # Order Submission
//!
//! Turns the cart into an order on the backend.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       submit_order()                                    │
//! │                                                                         │
//! │  1. Preconditions                                                      │
//! │     customer selected AND cart non-empty?                              │
//! │     │                                                                   │
//! │     ├── no ──► CheckoutIncomplete, no request sent                     │
//! │     ▼                                                                   │
//! │  2. Build payload                                                      │
//! │     { customerId, orderItems: [{ itemId, quantity, price }], total }   │
//! │     │                                                                   │
//! │  3. POST /orders                                                       │
//! │     │                                                                   │
//! │     ├── rejected ──► log, OrderFailed ("Failed to create order")       │
//! │     │                cart untouched, no retry                          │
//! │     ▼                                                                   │
//! │  4. Clear cart (lines + customer)                                      │
//! │  5. Refetch orders (awaited)                                           │
//! │  6. Navigate to /orders, notice "Order created successfully"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barista_core::validation::validate_checkout;
use barista_core::{CartAction, Order};
use tracing::{error, info, warn};

use crate::error::{ClientError, ClientResult};
use crate::router::Route;
use crate::store::Store;

/// Notice shown once the order is stored.
pub const ORDER_CREATED: &str = "Order created successfully";

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    /// The order as the backend stored it.
    pub order: Order,
    /// Where the dashboard goes next.
    pub redirect: Route,
    pub notice: &'static str,
}

impl Store {
    /// Submits the cart as a new order.
    ///
    /// ## Errors
    /// - [`ClientError::Core`] with `CheckoutIncomplete` when no customer is
    ///   selected or the cart is empty; nothing is sent.
    /// - [`ClientError::OrderFailed`] when the backend rejects the order.
    pub async fn submit_order(&mut self) -> ClientResult<CheckoutOutcome> {
        let payload = {
            let customer_id = validate_checkout(self.cart())?;
            self.cart().to_new_order(customer_id)
        };

        info!(
            customer_id = %payload.customer_id,
            lines = payload.order_items.len(),
            total = %payload.total,
            "Submitting order"
        );

        let order = match self.create_order(&payload).await {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Order submission failed");
                return Err(ClientError::OrderFailed {
                    source: Box::new(e),
                });
            }
        };

        self.dispatch(CartAction::Clear);

        if let Err(e) = self.fetch_orders().await {
            warn!(error = %e, "Order created but the order list could not be refreshed");
        }

        Ok(CheckoutOutcome {
            order,
            redirect: Route::Orders,
            notice: ORDER_CREATED,
        })
    }
}
