//! # Client Error Types
//!
//! Error types for requests, session storage and configuration.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Rejected     │  │     Configuration       │ │
//! │  │ (TransportError)│  │                 │  │                         │ │
//! │  │  Status         │─►│  best-effort    │  │  InvalidConfig          │ │
//! │  │  Network        │  │  message: the   │  │  InvalidUrl             │ │
//! │  │  Decode         │  │  server's or a  │  │  ConfigLoadFailed       │ │
//! │  │  InvalidUrl     │  │  fallback       │  │  ConfigSaveFailed       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Domain        │  │    Session      │  │     Checkout            │ │
//! │  │  Core           │  │  Session        │  │  OrderFailed            │ │
//! │  │  Validation     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`ClientError::Rejected`] displays as nothing but its message, so the
//! dashboard can show `err.to_string()` in an alert directly.

use barista_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// Transport Errors
// =============================================================================

/// Failure of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("Server responded with status {status}")]
    Status {
        status: u16,
        /// The `message` field of the error body, if any.
        message: Option<String>,
    },

    /// Connection refused, DNS failure, timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The body could not be decoded into the expected type.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// The server-provided message, when the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Client Errors
// =============================================================================

/// Error type covering every failure the client surfaces.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Request Errors
    // =========================================================================
    /// A request was rejected; `message` is what the admin sees.
    #[error("{message}")]
    Rejected {
        /// Short action name for logs, e.g. `"fetch customers"`.
        action: &'static str,
        message: String,
        #[source]
        source: TransportError,
    },

    /// Order submission failed after the preconditions passed.
    #[error("Failed to create order")]
    OrderFailed {
        #[source]
        source: Box<ClientError>,
    },

    // =========================================================================
    // Domain Errors
    // =========================================================================
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Session Errors
    // =========================================================================
    /// Reading or writing the persisted session failed.
    #[error("Session storage error: {0}")]
    Session(String),

    // =========================================================================
    // Navigation Errors
    // =========================================================================
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

impl ClientError {
    /// Wraps a transport failure, preferring the server's message over `fallback`.
    pub fn rejected(action: &'static str, fallback: &str, source: TransportError) -> Self {
        let message = source.server_message().unwrap_or(fallback).to_string();
        ClientError::Rejected {
            action,
            message,
            source,
        }
    }

    /// Returns true if the backend (or the network) refused the request.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_server_message() {
        let err = ClientError::rejected(
            "add customer",
            "failed to add customer",
            TransportError::Status {
                status: 400,
                message: Some("Email already exists".into()),
            },
        );
        assert_eq!(err.to_string(), "Email already exists");
        assert!(err.is_rejected());
    }

    #[test]
    fn test_rejected_falls_back() {
        let err = ClientError::rejected(
            "fetch items",
            "Failed to fetch items",
            TransportError::Network("connection refused".into()),
        );
        assert_eq!(err.to_string(), "Failed to fetch items");

        let blank = ClientError::rejected(
            "fetch items",
            "Failed to fetch items",
            TransportError::Status {
                status: 500,
                message: Some("  ".into()),
            },
        );
        assert_eq!(blank.to_string(), "Failed to fetch items");
    }

    #[test]
    fn test_order_failed_display() {
        let inner = ClientError::rejected(
            "create order",
            "failed to create order",
            TransportError::Network("timeout".into()),
        );
        let err = ClientError::OrderFailed {
            source: Box::new(inner),
        };
        assert_eq!(err.to_string(), "Failed to create order");
        assert!(!err.is_rejected());
    }

    #[test]
    fn test_config_errors() {
        assert!(ClientError::InvalidConfig("x".into()).is_config_error());
        assert!(!ClientError::Session("x".into()).is_config_error());
    }
}
