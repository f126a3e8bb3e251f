//! # Client Store
//!
//! All client-side state: one slice per resource, the auth slice and the
//! cart, plus the async operations ("thunks") that talk to the backend and
//! fold the results back into the slices.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Dispatch                                  │
//! │                                                                         │
//! │  Page                                                                  │
//! │    │  store.add_customer(&draft).await                                 │
//! │    ▼                                                                    │
//! │  Thunk (async, &mut self)                                              │
//! │    │  api.customers().create(&draft)                                   │
//! │    │                                                                    │
//! │    ├── fulfilled ──► slice handler (push / replace / filter / set)     │
//! │    │                                                                    │
//! │    └── rejected ───► ClientError::Rejected { message }                 │
//! │                      slice untouched                                   │
//! │                                                                         │
//! │  Cart actions are synchronous: store.dispatch(CartAction::...)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every thunk takes `&mut self`, so one operation finishes before the next
//! starts. There are no optimistic updates; pages refetch after mutations.

mod auth;
mod customer;
mod item;
mod order;

pub use auth::AuthSlice;
pub use customer::CustomerSlice;
pub use item::ItemSlice;
pub use order::OrderSlice;

use barista_core::{Cart, CartAction, Identified};
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::session::{FileStorage, MemoryStorage, SessionStorage};

// =============================================================================
// Record List
// =============================================================================

/// Ordered records keyed by id, with the fulfilled-request handlers every
/// resource slice shares.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        RecordList {
            records: Vec::new(),
        }
    }
}

impl<T: Identified> RecordList<T> {
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Fetch-all: replaces the list wholesale.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    /// Create: appends.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Update: replaces the record with the same id; unknown ids are ignored.
    pub fn replace(&mut self, record: T) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
    }

    /// Delete: drops every record with `id`.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|r| r.id() != id);
    }
}

// =============================================================================
// Store
// =============================================================================

/// The client store.
pub struct Store {
    api: ApiClient,
    session: Box<dyn SessionStorage>,
    session_key: String,
    customers: CustomerSlice,
    items: ItemSlice,
    orders: OrderSlice,
    auth: AuthSlice,
    cart: Cart,
}

impl Store {
    /// Creates a store and restores the auth slice from `session`.
    pub fn new(
        api: ApiClient,
        session: Box<dyn SessionStorage>,
        session_key: impl Into<String>,
    ) -> Self {
        let mut store = Store {
            api,
            session,
            session_key: session_key.into(),
            customers: CustomerSlice::default(),
            items: ItemSlice::default(),
            orders: OrderSlice::default(),
            auth: AuthSlice::default(),
            cart: Cart::new(),
        };
        store.restore_session();
        store
    }

    /// HTTP client and session storage as configured.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::from_config(config)?;
        let session: Box<dyn SessionStorage> = match config.session_path() {
            Some(path) => Box::new(FileStorage::new(path)),
            None => {
                warn!("No data directory available, session will not persist");
                Box::new(MemoryStorage::new())
            }
        };

        Ok(Self::new(api, session, config.session.key.clone()))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn customers(&self) -> &CustomerSlice {
        &self.customers
    }

    pub fn items(&self) -> &ItemSlice {
        &self.items
    }

    pub fn orders(&self) -> &OrderSlice {
        &self.orders
    }

    pub fn auth(&self) -> &AuthSlice {
        &self.auth
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Applies a cart action.
    pub fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "Cart action");
        self.cart.apply(action);
    }
}
