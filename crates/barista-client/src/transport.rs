//! # HTTP Transport
//!
//! The seam between the resource API and the network.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Request/Response Exchange                        │
//! │                                                                         │
//! │  ApiClient ── send(method, "/customers", body) ──► Transport           │
//! │                                                      │                  │
//! │                                      base_url + path │ JSON body        │
//! │                                                      ▼                  │
//! │                                               REST backend              │
//! │                                                      │                  │
//! │                        ┌─────────────────────────────┴──────────┐       │
//! │                        ▼                                        ▼       │
//! │                    2xx status                            4xx / 5xx      │
//! │              body as JSON (empty → null)       Status { message }       │
//! │                                                from body `message`      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries. The only time bound is the client-wide request timeout.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::TransportError;

// =============================================================================
// Method
// =============================================================================

/// HTTP methods used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

// =============================================================================
// Transport Trait
// =============================================================================

/// Sends one JSON request and returns the decoded JSON response.
///
/// `path` is relative to the backend's base URL and starts with `/`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

// =============================================================================
// HTTP Transport
// =============================================================================

/// [`Transport`] over HTTP via `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let base_url =
            Url::parse(base_url).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpTransport { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping any prefix the base carries.
    ///
    /// `http://host/api` + `/items` gives `http://host/api/items`.
    pub fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }
}

/// Parses a response body; non-JSON text is kept as a JSON string.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// The `message` field of an error body.
fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = self.url_for(path)?;
        debug!(%method, %url, "Sending request");

        let mut request = self.client.request(method.into(), url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Network(format!("request timed out: {}", e))
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let payload = decode_body(&bytes);

        if !status.is_success() {
            warn!(%method, path, status = status.as_u16(), "Request failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(&payload),
            });
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_for_keeps_base_prefix() {
        let transport = HttpTransport::new("http://localhost:3000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            transport.url_for("/customers").unwrap().as_str(),
            "http://localhost:3000/customers"
        );

        let prefixed = HttpTransport::new("http://host/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            prefixed.url_for("/orders/o-1").unwrap().as_str(),
            "http://host/api/orders/o-1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpTransport::new("not a url", Duration::from_secs(5)),
            Err(TransportError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b""), Value::Null);
        assert_eq!(decode_body(b" \n"), Value::Null);
        assert_eq!(decode_body(br#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(decode_body(b"Deleted"), json!("Deleted"));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(&json!({"message": "Invalid email or password"})),
            Some("Invalid email or password".to_string())
        );
        assert_eq!(error_message(&json!("plain text")), None);
        assert_eq!(error_message(&Value::Null), None);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Delete.to_string(), "DELETE");
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
    }
}
