//! # Orders Page
//!
//! The order list plus the cart panel used to compose a new order.
//!
//! ## Page Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Orders                                            [ Cart (3) ]        │
//! │  ┌──────────────────────────────────────────┐   ┌────────────────────┐ │
//! │  │ search orders...                          │   │ Customer: [Jane ▾] │ │
//! │  │ Order ID   Customer  Date  Status  Total │   │ Latte  −  2  +   ✕ │ │
//! │  │ 65f1...    Jane      ...   Pending ...   │   │ Mocha  −  1  +   ✕ │ │
//! │  └──────────────────────────────────────────┘   │ Total  LKR 1100.00 │ │
//! │  ┌──────────────────────────────────────────┐   │ [ Create Order ]   │ │
//! │  │ search items...     Latte  Mocha  ...    │   └────────────────────┘ │
//! │  └──────────────────────────────────────────┘                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart edits go straight to the store's cart reducer; [`OrdersPage::create_order`]
//! hands over to the store's submission flow.

use barista_client::{Route, Store};
use barista_core::{CartAction, Item, Order, OrderStatus};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::notify::Notifier;
use crate::render;

#[derive(Debug, Clone, Default)]
pub struct OrdersPage {
    search: String,
    item_search: String,
    cart_open: bool,
}

impl OrdersPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers and items feed the cart panel; orders feed the list.
    pub async fn load(&self, store: &mut Store) -> AppResult<()> {
        store.fetch_customers().await?;
        store.fetch_items().await?;
        store.fetch_orders().await?;
        Ok(())
    }

    // =========================================================================
    // Searches
    // =========================================================================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn visible_orders<'s>(&self, store: &'s Store) -> Vec<&'s Order> {
        store.orders().search(&self.search)
    }

    pub fn set_item_search(&mut self, term: impl Into<String>) {
        self.item_search = term.into();
    }

    pub fn visible_items<'s>(&self, store: &'s Store) -> Vec<&'s Item> {
        store.items().search(&self.item_search)
    }

    // =========================================================================
    // Cart Panel
    // =========================================================================

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn select_customer(&self, store: &mut Store, customer_id: &str) {
        store.dispatch(CartAction::SetCustomer(customer_id.to_string()));
    }

    /// Adds one of the item with `item_id` from the loaded menu.
    pub fn add_to_cart(&self, store: &mut Store, item_id: &str) -> AppResult<()> {
        let item = store
            .items()
            .find(item_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Item", item_id))?;
        store.dispatch(CartAction::AddItem(item));
        Ok(())
    }

    pub fn remove_from_cart(&self, store: &mut Store, item_id: &str) {
        store.dispatch(CartAction::RemoveItem(item_id.to_string()));
    }

    /// The − and + buttons. Reaching zero removes the line.
    pub fn change_quantity(&self, store: &mut Store, item_id: &str, delta: i64) {
        let quantity = store.cart().quantity_of(item_id).saturating_add(delta);
        store.dispatch(CartAction::SetQuantity {
            item_id: item_id.to_string(),
            quantity,
        });
    }

    /// Submits the cart. On success the panel closes and the page moves to
    /// the returned route.
    pub async fn create_order(
        &mut self,
        store: &mut Store,
        notifier: &dyn Notifier,
    ) -> AppResult<Route> {
        let outcome = store.submit_order().await?;
        notifier.notice(outcome.notice);
        self.close_cart();
        Ok(outcome.redirect)
    }

    /// Status edits are accepted and dropped; the backend owns transitions.
    pub fn change_status(&self, order_id: &str, status: OrderStatus) {
        debug!(order_id, status = %status, "Status change ignored");
    }

    pub fn view_details(&self, order_id: &str) -> Route {
        Route::order_details(order_id)
    }

    pub fn render(&self, store: &Store, currency: &str) -> String {
        let mut out = render::orders_table(&self.visible_orders(store), currency).to_string();

        if self.cart_open {
            let customer = store
                .cart()
                .customer_id()
                .map(|id| {
                    store
                        .customers()
                        .find(id)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .unwrap_or_else(|| "(none)".to_string());

            out.push_str(&format!(
                "\n\nCart ({})  customer: {}\n{}",
                store.cart().line_count(),
                customer,
                render::cart_table(store.cart(), currency)
            ));
        }
        out
    }
}
