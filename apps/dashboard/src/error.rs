//! # Page Error Type
//!
//! Unified error type for page actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  Page action (e.g. CustomersPage::submit)                               │
//! │  AppResult<T>                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Form invalid? ──── ValidationError ────────────┐                      │
//! │         │                                       │                      │
//! │         ▼                                       ▼                      │
//! │  Request rejected? ─ ClientError::Rejected ─── AppError ──► alert     │
//! │         │                                       ▲                      │
//! │         ▼                                       │                      │
//! │  Page override? ─── "Login Failed: ..." ────────┘                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──► notice / rendered page                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `message` is exactly what the alert shows. `code` is the machine-readable
//! part, also used for the process exit status.

use barista_client::ClientError;
use barista_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for page actions.
pub type AppResult<T> = Result<T, AppError>;

/// Error surfaced by a page.
///
/// ## Serialization
/// The failure as it is logged:
/// ```json
/// {
///   "code": "REJECTED",
///   "message": "failed to fetch customers"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Alert text
    pub message: String,
}

/// Error codes for page failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A form failed its presence checks
    ValidationError,

    /// The backend (or the network) refused a request
    Rejected,

    /// Record or route parameter not found
    NotFound,

    /// Checkout preconditions not met
    CheckoutIncomplete,

    /// Reading or writing the session marker failed
    SessionError,

    /// Bad configuration or unknown route
    ConfigError,

    /// Interactive prompt failed or was cancelled
    PromptError,

    Internal,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError | ErrorCode::CheckoutIncomplete => 2,
            ErrorCode::Rejected => 3,
            ErrorCode::NotFound => 4,
            ErrorCode::ConfigError => 78,
            _ => 1,
        }
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// A rejected request whose alert text the page chooses itself.
    pub fn rejected(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Rejected, message)
    }

    /// JSON form of the error, for logs and scripted callers.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }
}

/// Converts client errors to page errors.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Rejected { .. } => AppError::rejected(err.to_string()),
            ClientError::OrderFailed { .. } => AppError::rejected(err.to_string()),
            ClientError::Core(e) => AppError::from(e),
            ClientError::Validation(e) => AppError::from(e),
            ClientError::Session(_) => AppError::new(ErrorCode::SessionError, err.to_string()),
            ClientError::UnknownRoute(_) => AppError::new(ErrorCode::NotFound, err.to_string()),
            ClientError::InvalidConfig(_)
            | ClientError::InvalidUrl(_)
            | ClientError::ConfigLoadFailed(_)
            | ClientError::ConfigSaveFailed(_) => {
                AppError::new(ErrorCode::ConfigError, err.to_string())
            }
        }
    }
}

/// Converts core errors to page errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CheckoutIncomplete { .. } => {
                AppError::new(ErrorCode::CheckoutIncomplete, err.to_string())
            }
            CoreError::UnknownCategory(_) | CoreError::UnknownStatus(_) => {
                AppError::validation(err.to_string())
            }
            CoreError::Validation(e) => AppError::from(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<inquire::InquireError> for AppError {
    fn from(err: inquire::InquireError) -> Self {
        AppError::new(ErrorCode::PromptError, format!("Prompt failed: {}", err))
    }
}
