//! # Cart
//!
//! The in-memory shopping cart used to compose a new order.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Orders page action       CartAction              State change          │
//! │  ──────────────────       ──────────              ────────────          │
//! │                                                                         │
//! │  Click "Add" ───────────► AddItem(item) ────────► qty += 1 or push      │
//! │                                                                         │
//! │  Click +/- ─────────────► SetQuantity{id, n} ───► qty = n (n ≤ 0: drop) │
//! │                                                                         │
//! │  Click "Remove" ────────► RemoveItem(id) ───────► retain(id != ...)     │
//! │                                                                         │
//! │  Select customer ───────► SetCustomer(id) ──────► customer = id         │
//! │                                                                         │
//! │  Order created ─────────► Clear ────────────────► lines = [], no cust.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by item id (adding the same item bumps the quantity)
//! - Every line has quantity ≥ 1 (anything lower removes the line)
//! - No line exceeds [`MAX_ITEM_QUANTITY`]
//! - Lines keep insertion order; new items append at the end
//! - Lines and customer are cleared together
//!
//! Every operation is total: no errors, unknown ids are ignored.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Item, NewOrder, NewOrderLine};
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Line
// =============================================================================

/// An item in the cart with its quantity.
///
/// The full [`Item`] is kept so the unit price shown in the cart is the one
/// the admin saw when adding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: Item,
    pub quantity: i64,
}

impl CartLine {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Actions
// =============================================================================

/// Actions accepted by [`Cart::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(Item),
    RemoveItem(String),
    SetQuantity { item_id: String, quantity: i64 },
    SetCustomer(String),
    Clear,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: ordered lines plus the selected customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    customer_id: Option<String>,
}

impl Cart {
    /// Creates an empty cart with no customer.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Single entry point for dispatched actions.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(item) => self.add_item(item),
            CartAction::RemoveItem(item_id) => self.remove_item(&item_id),
            CartAction::SetQuantity { item_id, quantity } => {
                self.set_quantity(&item_id, quantity)
            }
            CartAction::SetCustomer(customer_id) => self.set_customer(customer_id),
            CartAction::Clear => self.clear(),
        }
    }

    /// Adds one unit of an item.
    ///
    /// - Already in cart: quantity + 1, up to [`MAX_ITEM_QUANTITY`]
    /// - Not in cart: appended with quantity 1
    pub fn add_item(&mut self, item: Item) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            line.quantity = (line.quantity + 1).min(MAX_ITEM_QUANTITY);
            return;
        }

        self.lines.push(CartLine { item, quantity: 1 });
    }

    /// Removes the line for `item_id`; absent ids are a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|l| l.item.id != item_id);
    }

    /// Overwrites the quantity of a line.
    ///
    /// A quantity of zero or below removes the line; anything above
    /// [`MAX_ITEM_QUANTITY`] is capped. Absent ids are ignored.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = quantity.min(MAX_ITEM_QUANTITY);
        }
    }

    /// Selects the customer the order will be placed for.
    ///
    /// No check that the id belongs to a known customer.
    pub fn set_customer(&mut self, customer_id: impl Into<String>) {
        self.customer_id = Some(customer_id.into());
    }

    /// Empties the cart and unsets the customer in one step.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.customer_id = None;
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Quantity of `item_id` in the cart (0 when absent).
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item.id == item_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Σ quantities across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ unit price × quantity.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Order lines as sent to the backend: item id, quantity, unit price.
    pub fn order_lines(&self) -> Vec<NewOrderLine> {
        self.lines
            .iter()
            .map(|l| NewOrderLine {
                item_id: l.item.id.clone(),
                quantity: l.quantity,
                price: l.item.price,
            })
            .collect()
    }

    /// Builds the order payload for `customer_id` with the precomputed total.
    pub fn to_new_order(&self, customer_id: &str) -> NewOrder {
        NewOrder {
            customer_id: customer_id.to_string(),
            order_items: self.order_lines(),
            total: self.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
