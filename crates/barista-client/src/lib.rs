//! # barista-client: REST Client and State for the Barista Shop admin
//!
//! Everything between the pages and the backend: HTTP transport, typed
//! resource handles, the client store with its slices and cart, the persisted
//! login marker, the route table and the order-submission flow.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Architecture                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                           Store                                  │  │
//! │  │                                                                  │  │
//! │  │  customers │ items │ orders (+selected) │ auth │ cart            │  │
//! │  │  thunks: fetch / add / update / delete / login / submit_order    │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  ApiClient     │  │ SessionStorage │  │  Route                 │    │
//! │  │                │  │                │  │                        │    │
//! │  │ customers()    │  │ FileStorage    │  │ table + auth guard     │    │
//! │  │ items()        │  │ MemoryStorage  │  │ sidebar menu           │    │
//! │  │ orders()       │  │                │  │                        │    │
//! │  │ users()        │  │ key "user"     │  │                        │    │
//! │  └───────┬────────┘  └────────────────┘  └────────────────────────┘    │
//! │          ▼                                                              │
//! │  ┌────────────────┐                                                    │
//! │  │  Transport     │  HttpTransport (reqwest) or MockTransport          │
//! │  └────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`api`] - Resource handles and failure-message mapping
//! - [`checkout`] - Cart → order submission
//! - [`config`] - Base URL, endpoints, session and display settings
//! - [`error`] - Client error types
//! - [`router`] - Routes and the auth guard
//! - [`session`] - Persisted login marker
//! - [`store`] - Slices and thunks
//! - [`transport`] - HTTP seam
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barista_client::{ClientConfig, Store};
//! use barista_core::CartAction;
//!
//! let config = ClientConfig::load_or_default(None);
//! let mut store = Store::from_config(&config)?;
//!
//! store.fetch_items().await?;
//! let latte = store.items().all()[0].clone();
//! store.dispatch(CartAction::AddItem(latte));
//! store.dispatch(CartAction::SetCustomer("c-1".into()));
//!
//! let outcome = store.submit_order().await?;
//! println!("{} → {}", outcome.notice, outcome.redirect);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod store;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::ApiClient;
pub use checkout::{CheckoutOutcome, ORDER_CREATED};
pub use config::{ClientConfig, Endpoints};
pub use error::{ClientError, ClientResult, TransportError};
pub use router::Route;
pub use session::{FileStorage, MemoryStorage, SessionStorage};
pub use store::Store;
pub use transport::{HttpTransport, Method, Transport};
