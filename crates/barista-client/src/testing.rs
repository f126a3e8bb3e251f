//! # Test Utilities
//!
//! A scripted [`Transport`] for exercising the client without a backend.
//!
//! Queue responses with [`MockTransport::respond`] / [`MockTransport::fail`]
//! in the order requests will be made, run the code under test, then inspect
//! [`MockTransport::requests`]. A request with nothing queued fails with a
//! network error, so an unexpected call shows up as a rejected request.
//!
//! ```rust,ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.respond(json!([]));
//! let mut store = Store::new(ApiClient::new(mock.clone(), Endpoints::default()), ...);
//! store.fetch_customers().await?;
//! assert_eq!(mock.requests()[0].path, "/customers");
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::api::ApiClient;
use crate::config::Endpoints;
use crate::error::TransportError;
use crate::session::MemoryStorage;
use crate::store::Store;
use crate::transport::{Method, Transport};

/// A request as the mock received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Replays queued responses and records every request.
#[derive(Debug, Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub fn respond(&self, body: Value) -> &Self {
        self.push(Ok(body))
    }

    /// Queues a failure.
    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, outcome: Result<Value, TransportError>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Requests matching `method` and `path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    /// Responses still queued.
    pub fn pending(&self) -> usize {
        self.script.lock().map(|script| script.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
            });
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| {
                Err(TransportError::Network(format!(
                    "no scripted response for {} {}",
                    method, path
                )))
            })
    }
}

/// A store over a fresh mock and in-memory session storage.
pub fn mock_store() -> (Store, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let api = ApiClient::new(mock.clone(), Endpoints::default());
    let store = Store::new(api, Box::new(MemoryStorage::new()), "user");
    (store, mock)
}
