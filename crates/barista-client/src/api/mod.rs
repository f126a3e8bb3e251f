//! # Resource API
//!
//! Typed wrappers over the REST backend, one handle per resource.
//!
//! ## Handle Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Resource Handles                                     │
//! │                                                                         │
//! │  Store thunk                                                           │
//! │       │                                                                 │
//! │       │  api.customers().create(&draft)                                │
//! │       ▼                                                                 │
//! │  CustomerApi                                                           │
//! │  ├── list(&self)                 GET    /customers                     │
//! │  ├── create(&self, draft)        POST   /customers                     │
//! │  ├── update(&self, id, draft)    PUT    /customers/:id                 │
//! │  └── delete(&self, id)           DELETE /customers/:id                 │
//! │       │                                                                 │
//! │       │  Transport::send                                               │
//! │       ▼                                                                 │
//! │  REST backend                                                          │
//! │                                                                         │
//! │  Every failure becomes ClientError::Rejected carrying the server's     │
//! │  `message` or the handle's fallback text.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Handles
//!
//! - [`CustomerApi`] - Customer CRUD
//! - [`ItemApi`] - Menu item CRUD
//! - [`OrderApi`] - Order list, detail, create
//! - [`UserApi`] - Login and registration

pub mod customers;
pub mod items;
pub mod orders;
pub mod users;

pub use customers::CustomerApi;
pub use items::ItemApi;
pub use orders::OrderApi;
pub use users::UserApi;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::{ClientConfig, Endpoints};
use crate::error::{ClientError, ClientResult, TransportError};
use crate::transport::{HttpTransport, Method, Transport};

/// Entry point to the backend: a transport plus the endpoint table.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        ApiClient {
            transport,
            endpoints,
        }
    }

    /// Builds an HTTP-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(&config.api.base_url, config.timeout())
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self::new(Arc::new(transport), config.endpoints.clone()))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn customers(&self) -> CustomerApi<'_> {
        CustomerApi::new(self)
    }

    pub fn items(&self) -> ItemApi<'_> {
        ItemApi::new(self)
    }

    pub fn orders(&self) -> OrderApi<'_> {
        OrderApi::new(self)
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Sends a request and decodes the response into `T`.
    ///
    /// `action` names the request in logs; `fallback` is the message shown
    /// when the server gives none.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        action: &'static str,
        fallback: &str,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| reject(action, fallback, TransportError::Decode(e.to_string())))?;

        debug!(action, %method, path, "Dispatching request");

        let payload = self
            .transport
            .send(method, path, body)
            .await
            .map_err(|e| reject(action, fallback, e))?;

        serde_json::from_value(payload)
            .map_err(|e| reject(action, fallback, TransportError::Decode(e.to_string())))
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        action: &'static str,
        fallback: &str,
    ) -> ClientResult<T> {
        self.request::<T, ()>(Method::Get, path, None, action, fallback)
            .await
    }

    /// DELETE whose acknowledgement body is ignored.
    pub(crate) async fn delete(
        &self,
        path: &str,
        action: &'static str,
        fallback: &str,
    ) -> ClientResult<()> {
        self.request::<serde_json::Value, ()>(Method::Delete, path, None, action, fallback)
            .await
            .map(|_| ())
    }
}

fn reject(action: &'static str, fallback: &str, source: TransportError) -> ClientError {
    error!(action, error = %source, "Request rejected");
    ClientError::rejected(action, fallback, source)
}
