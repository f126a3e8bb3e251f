//! # barista-core: Pure Business Logic for the Barista Shop Admin
//!
//! This crate holds the domain model and every rule that can be expressed
//! without touching the network, the disk or the terminal.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Barista Shop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard (apps/dashboard)                      │   │
//! │  │  Customers ─ Items ─ Orders ─ OrderDetails ─ Login ─ Signup     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            barista-client (slices, REST, session)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ barista-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │validation│ │ search │  │   │
//! │  │   │Customer │ │  Money  │ │  Cart   │ │  forms   │ │ filter │  │   │
//! │  │   │Item     │ │ decimal │ │CartLine │ │ checkout │ │ stats  │  │   │
//! │  │   │Order    │ │  serde  │ │ Action  │ │          │ │        │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire/domain types (Customer, Item, Order, OrderItem, AuthUser)
//! - [`money`] - Integer money with a decimal wire adapter
//! - [`cart`] - The shopping-cart reducer
//! - [`validation`] - Presence checks for forms and checkout preconditions
//! - [`search`] - Client-side substring filters
//! - [`stats`] - Dashboard figures
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use barista_core::{Cart, Item, ItemCategory, Money};
//!
//! let latte = Item::new("i-1", "Latte", ItemCategory::Beverage, Money::from_major_minor(350, 0));
//!
//! let mut cart = Cart::new();
//! cart.add_item(latte.clone());
//! cart.add_item(latte);
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.total(), Money::from_major_minor(700, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod search;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartAction, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use search::Searchable;
pub use stats::DashboardStats;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Menu categories offered by the item form, in display order.
///
/// The first entry is the default for a freshly opened "Add Item" form.
pub static ITEM_CATEGORIES: [ItemCategory; 4] = [
    ItemCategory::Cake,
    ItemCategory::Beverage,
    ItemCategory::Dessert,
    ItemCategory::Pastry,
];

/// Largest quantity a single cart line may hold.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Number of items shown in the dashboard's "Recent Items" panel.
pub const RECENT_ITEMS_LIMIT: usize = 8;
