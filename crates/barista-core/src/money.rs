//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Integer Inside, Decimal on the Wire
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  REST backend                 barista-core               Terminal       │
//! │                                                                         │
//! │  "price": 4.5   ──decimal──►  Money(450)  ──format──►  "LKR 4.50"       │
//! │  "total": 350   ──decimal──►  Money(35000)                              │
//! │                                                                         │
//! │  Cart math (Σ price × qty) runs on integer cents, so                    │
//! │  0.1 + 0.2 never turns into 0.30000000000000004.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The backend speaks plain JSON numbers in major units. The [`decimal`]
//! module is the serde adapter that converts at the boundary; everything
//! inside the workspace works with cents.
//!
//! ## Usage
//! ```rust
//! use barista_core::money::Money;
//!
//! let price = Money::from_cents(450);        // 4.50
//! let line = price.multiply_quantity(3);     // 13.50
//! assert_eq!(line.to_string(), "13.50");
//! assert_eq!(line.format_with("LKR"), "LKR 13.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor units (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative price must stay representable so the
///   item form can reject it
/// - **Saturating arithmetic**: line totals and sums clamp at the i64 bounds
///   instead of wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialize/Deserialize**: transparent cents for local persistence;
///   wire fields use [`decimal`] instead
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let price = Money::from_cents(35000); // 350.00
    /// assert_eq!(price.cents(), 35000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Converts a decimal amount (as sent by the backend) to cents.
    ///
    /// Rounds half away from zero at the second decimal place, so
    /// `4.5` becomes 450 and `2.675` becomes 268.
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the amount as a decimal in major units.
    ///
    /// Only for the wire; never do arithmetic on the result.
    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (rupees, dollars, ...).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(35000);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 70000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Formats the amount behind a currency prefix, e.g. `LKR 350.00`.
    ///
    /// An empty symbol yields the bare amount.
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let amount = format!("{}.{:02}", self.major().abs(), self.minor_part());

        if symbol.is_empty() {
            format!("{}{}", sign, amount)
        } else {
            format!("{}{} {}", sign, symbol, amount)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Bare amount with two decimals, e.g. `350.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(""))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Decimal Wire Adapter
// =============================================================================

/// Serde adapter for money fields exchanged as JSON decimals.
///
/// ## Usage
/// ```rust
/// use barista_core::money::{self, Money};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Line {
///     #[serde(with = "money::decimal")]
///     price: Money,
/// }
///
/// let line: Line = serde_json::from_str(r#"{"price": 4.5}"#).unwrap();
/// assert_eq!(line.price.cents(), 450);
/// assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"price":4.5}"#);
/// ```
pub mod decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Whole amounts go out as integers so `350` stays `350`, not `350.0`.
        if money.minor_part() == 0 {
            serializer.serialize_i64(money.major())
        } else {
            serializer.serialize_f64(money.to_decimal())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount))
    }

    /// Same adapter for optional fields; `null` and missing map to `None`.
    pub mod option {
        use super::super::Money;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(money: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match money {
                Some(m) => super::serialize(m, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let amount = Option::<f64>::deserialize(deserializer)?;
            Ok(amount.map(Money::from_decimal))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(350, 0).cents(), 35000);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_from_decimal_rounds() {
        assert_eq!(Money::from_decimal(4.5).cents(), 450);
        assert_eq!(Money::from_decimal(350.0).cents(), 35000);
        assert_eq!(Money::from_decimal(0.1 + 0.2).cents(), 30);
        assert_eq!(Money::from_decimal(19.999).cents(), 2000);
    }

    #[test]
    fn test_display_and_prefix() {
        assert_eq!(Money::from_cents(35000).to_string(), "350.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(35000).format_with("LKR"), "LKR 350.00");
        assert_eq!(Money::from_cents(-550).format_with("LKR"), "-LKR 5.50");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);

        assert_eq!(huge.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!((huge + huge + huge).cents(), i64::MAX);
        assert_eq!(
            Money::from_cents(100).multiply_quantity(i64::MAX).cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_decimal_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Wire {
            #[serde(with = "decimal")]
            price: Money,
            #[serde(with = "decimal::option", default)]
            discount: Option<Money>,
        }

        let wire: Wire = serde_json::from_str(r#"{"price": 350}"#).unwrap();
        assert_eq!(wire.price.cents(), 35000);
        assert!(wire.discount.is_none());

        let out = serde_json::to_value(&Wire {
            price: Money::from_cents(450),
            discount: None,
        })
        .unwrap();
        assert_eq!(out["price"], serde_json::json!(4.5));

        let out = serde_json::to_value(&Wire {
            price: Money::from_cents(35000),
            discount: Some(Money::from_cents(100)),
        })
        .unwrap();
        assert_eq!(out["price"], serde_json::json!(350));
        assert_eq!(out["discount"], serde_json::json!(1));
    }
}
