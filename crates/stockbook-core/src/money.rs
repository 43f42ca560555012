//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  With floating point:                                               │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                        │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Centavos                                     │
//! │    R$ 9.99 is stored as 999. Parsing happens once, at the input     │
//! │    boundary; display happens once, at the output boundary.          │
//! │    Everything in between is exact integer arithmetic.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockbook_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(999); // R$ 9.99
//!
//! // Parse user input (decimal text, dot or comma separator)
//! let parsed = Money::parse("9.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // Display for the product table
//! assert_eq!(price.to_string(), "R$ 9.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: plenty of headroom for inventory totals
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Parsing at the boundary**: user input is parsed exactly once, with
///   at most two fraction digits; there is no `from_float` constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let price = Money::from_cents(999); // R$ 9.99
    /// assert_eq!(price.cents(), 999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a quantity (for the inventory-value total).
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(999); // R$ 9.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 2997);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a decimal price string into Money.
    ///
    /// ## Accepted Input
    /// - `"9.99"` or `"9,99"` (comma accepted as the decimal separator)
    /// - `"10"` (whole units)
    /// - `"0.5"` (one fraction digit means tenths: R$ 0.50)
    ///
    /// ## Rejected Input
    /// - empty strings, negative values, non-digits
    /// - more than two fraction digits (there is no sub-centavo money)
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::money::Money;
    ///
    /// assert_eq!(Money::parse("9.99").unwrap().cents(), 999);
    /// assert_eq!(Money::parse("9,99").unwrap().cents(), 999);
    /// assert_eq!(Money::parse("10").unwrap().cents(), 1000);
    /// assert!(Money::parse("9.999").is_err());
    /// assert!(Money::parse("-1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        // Normalize the decimal separator: comma is common in pt-BR input.
        let normalized = input.replace(',', ".");

        let (units_str, frac_str) = match normalized.split_once('.') {
            Some((u, f)) => (u, f),
            None => (normalized.as_str(), ""),
        };

        if frac_str.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
            || (units_str.is_empty() && frac_str.is_empty())
        {
            return Err(invalid("not a decimal number"));
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str
                .parse()
                .map_err(|_| invalid("value is too large"))?
        };

        // "5" → 50 centavos, "50" → 50 centavos
        let cents: i64 = match frac_str.len() {
            0 => 0,
            1 => frac_str.parse::<i64>().map_err(|_| invalid("not a decimal number"))? * 10,
            _ => frac_str.parse().map_err(|_| invalid("not a decimal number"))?,
        };

        units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .map(Money)
            .ok_or_else(|| invalid("value is too large"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the product-table format.
///
/// The `R$` prefix matches the rendered product listing, e.g. `R$ 9.99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R$ {}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
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
        let money = Money::from_cents(999);
        assert_eq!(money.cents(), 999);
        assert_eq!(money.units(), 9);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(999)), "R$ 9.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0.00");
        assert_eq!(format!("{}", Money::from_cents(100000)), "R$ 1000.00");
    }

    #[test]
    fn test_parse_dot_and_comma() {
        assert_eq!(Money::parse("9.99").unwrap().cents(), 999);
        assert_eq!(Money::parse("9,99").unwrap().cents(), 999);
        assert_eq!(Money::parse(" 9.99 ").unwrap().cents(), 999);
    }

    #[test]
    fn test_parse_whole_and_short_fractions() {
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse(".99").unwrap().cents(), 99);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("9.999").is_err());
        assert!(Money::parse("-1").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let mut total = Money::zero();
        total += Money::from_cents(999).multiply_quantity(3);
        assert_eq!(total.cents(), 2997);
    }

    #[test]
    fn test_zero_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(1).is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
