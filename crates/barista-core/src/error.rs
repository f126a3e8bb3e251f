//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations (checkout)            │
//! │  └── ValidationError  - Form presence checks                           │
//! │                                                                         │
//! │  barista-client errors (separate crate)                                │
//! │  └── ClientError      - Rejected requests, session, config             │
//! │                                                                         │
//! │  dashboard errors (in app)                                             │
//! │  └── AppError         - What the terminal shows (code + message)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → AppError → alert    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are the exact strings the admin sees, so they are part of the
//! behavior and covered by tests.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Checkout was attempted without a selected customer or with an empty cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Create Order
    ///      │
    ///      ▼
    /// customer selected?  cart non-empty?
    ///      │                    │
    ///      └──── either no ─────┘
    ///                │
    ///                ▼
    /// alert: "Please select a customer and add items to the cart"
    /// (no request is sent)
    /// ```
    #[error("Please select a customer and add items to the cart")]
    CheckoutIncomplete {
        missing_customer: bool,
        empty_cart: bool,
    },

    /// Unknown menu category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown order status name.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised before anything is dispatched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Several required form fields are blank.
    ///
    /// The form shows one alert for the whole form rather than per field.
    #[error("{message}")]
    IncompleteForm {
        message: String,
        missing: Vec<String>,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Password and confirmation differ on the signup form.
    #[error("password do not match")]
    PasswordMismatch,

    /// Invalid format (e.g., a quantity that is not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_message() {
        let err = CoreError::CheckoutIncomplete {
            missing_customer: true,
            empty_cart: false,
        };
        assert_eq!(
            err.to_string(),
            "Please select a customer and add items to the cart"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "password do not match"
        );

        let err = ValidationError::IncompleteForm {
            message: "Please fill all fields".to_string(),
            missing: vec!["telephone".to_string()],
        };
        assert_eq!(err.to_string(), "Please fill all fields");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
