//! # Validation Module
//!
//! Presence checks run before anything is dispatched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Page form (dashboard)                                        │
//! │  ├── Collects the edit buffer                                          │
//! │  └── Calls THIS MODULE before dispatching                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields present (trimmed, non-empty)                      │
//! │  ├── Price not negative (the form's input constraint)                  │
//! │  ├── Typed-in quantities within 1..=MAX_ITEM_QUANTITY                  │
//! │  └── Checkout preconditions (customer + non-empty cart)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: REST backend                                                 │
//! │  └── Whatever the server enforces; its message is surfaced as-is       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No schema validation beyond that.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Credentials, CustomerDraft, ItemDraft, Registration};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Alert shown when the customer form is incomplete.
pub const CUSTOMER_FORM_INCOMPLETE: &str = "Please fill all fields";

/// Alert shown when the item form is incomplete.
pub const ITEM_FORM_INCOMPLETE: &str = "Please fill all the fields";

// =============================================================================
// Field Validators
// =============================================================================

/// Fails with [`ValidationError::Required`] when `value` is blank.
///
/// ## Example
/// ```rust
/// use barista_core::validation::require;
///
/// assert!(require("email", "jane@example.com").is_ok());
/// assert!(require("email", "   ").is_err());
/// ```
pub fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a typed-in line quantity.
///
/// ## Rules
/// - Must be at least 1
/// - Must not exceed [`MAX_ITEM_QUANTITY`] (999)
///
/// ## Example
/// ```rust
/// use barista_core::validation::validate_quantity;
///
/// assert!(validate_quantity(3).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(i64::MAX).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(1..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Collects every blank field into one form-level error.
fn require_all(message: &str, fields: &[(&str, &str)]) -> ValidationResult<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::IncompleteForm {
            message: message.to_string(),
            missing,
        })
    }
}

// =============================================================================
// Form Validators
// =============================================================================

/// Customer form: name, email and telephone are all required.
pub fn validate_customer_draft(draft: &CustomerDraft) -> ValidationResult<()> {
    require_all(
        CUSTOMER_FORM_INCOMPLETE,
        &[
            ("name", draft.name.as_str()),
            ("email", draft.email.as_str()),
            ("telephone", draft.telephone.as_str()),
        ],
    )
}

/// Item form: name required, price not negative.
///
/// The category is typed, so it is always present.
pub fn validate_item_draft(draft: &ItemDraft) -> ValidationResult<()> {
    require_all(ITEM_FORM_INCOMPLETE, &[("name", draft.name.as_str())])?;

    if draft.price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Login form: email and password required.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    require("email", &credentials.email)?;
    require("password", &credentials.password)
}

/// Signup form.
///
/// The password/confirmation comparison runs first so the admin sees the
/// mismatch message even when another field is also blank.
pub fn validate_registration(
    registration: &Registration,
    confirm_password: &str,
) -> ValidationResult<()> {
    if registration.password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    require("name", &registration.name)?;
    require("email", &registration.email)?;
    require("password", &registration.password)
}

// =============================================================================
// Checkout
// =============================================================================

/// Checks the order-submission preconditions and returns the customer id.
///
/// ## Example
/// ```rust
/// use barista_core::{Cart, CoreError};
/// use barista_core::validation::validate_checkout;
///
/// let cart = Cart::new();
/// assert!(matches!(
///     validate_checkout(&cart),
///     Err(CoreError::CheckoutIncomplete { missing_customer: true, empty_cart: true })
/// ));
/// ```
pub fn validate_checkout(cart: &Cart) -> CoreResult<&str> {
    match cart.customer_id().filter(|id| !id.trim().is_empty()) {
        Some(customer_id) if !cart.is_empty() => Ok(customer_id),
        customer => Err(CoreError::CheckoutIncomplete {
            missing_customer: customer.is_none(),
            empty_cart: cart.is_empty(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Item, ItemCategory};

    #[test]
    fn test_require() {
        assert!(require("name", "Jane").is_ok());
        assert_eq!(
            require("name", ""),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_ITEM_QUANTITY).is_ok());

        let err = validate_quantity(i64::MAX).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-2).is_err());
    }

    #[test]
    fn test_customer_draft() {
        let mut draft = CustomerDraft {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            telephone: String::new(),
        };

        match validate_customer_draft(&draft) {
            Err(ValidationError::IncompleteForm { message, missing }) => {
                assert_eq!(message, CUSTOMER_FORM_INCOMPLETE);
                assert_eq!(missing, vec!["telephone".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        draft.telephone = "0771234567".to_string();
        assert!(validate_customer_draft(&draft).is_ok());
    }

    #[test]
    fn test_item_draft() {
        let mut draft = ItemDraft::default();
        assert!(validate_item_draft(&draft).is_err());

        draft.name = "Croissant".to_string();
        assert!(validate_item_draft(&draft).is_ok());

        draft.price = Money::from_cents(-1);
        assert_eq!(
            validate_item_draft(&draft),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_registration_checks_mismatch_first() {
        let registration = Registration {
            name: String::new(),
            email: "a@b.lk".to_string(),
            password: "7890".to_string(),
        };

        assert_eq!(
            validate_registration(&registration, "789"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(matches!(
            validate_registration(&registration, "7890"),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_credentials() {
        let ok = Credentials {
            email: "namal@gmail.com".to_string(),
            password: "7890".to_string(),
        };
        assert!(validate_credentials(&ok).is_ok());

        let blank = Credentials {
            email: "namal@gmail.com".to_string(),
            password: String::new(),
        };
        assert!(validate_credentials(&blank).is_err());
    }

    #[test]
    fn test_checkout_preconditions() {
        let latte = Item::new("i-1", "Latte", ItemCategory::Beverage, Money::from_cents(35000));

        let mut cart = Cart::new();
        cart.add_item(latte);
        assert_eq!(
            validate_checkout(&cart),
            Err(CoreError::CheckoutIncomplete {
                missing_customer: true,
                empty_cart: false
            })
        );

        cart.set_customer("c-1");
        assert_eq!(validate_checkout(&cart), Ok("c-1"));

        cart.remove_item("i-1");
        assert_eq!(
            validate_checkout(&cart),
            Err(CoreError::CheckoutIncomplete {
                missing_customer: false,
                empty_cart: true
            })
        );

        cart.set_customer("");
        cart.add_item(Item::new("i-2", "Tea", ItemCategory::Beverage, Money::from_cents(100)));
        assert!(validate_checkout(&cart).is_err());
    }
}
