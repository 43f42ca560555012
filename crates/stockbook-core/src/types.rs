//! # Domain Types
//!
//! Core domain types used throughout Stockbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐      ┌─────────────────┐                       │
//! │  │      User       │ 1:N  │     Product     │                       │
//! │  │  ─────────────  │◄─────│  ─────────────  │                       │
//! │  │  email (key)    │      │  id (store key) │                       │
//! │  │  name           │      │  name           │                       │
//! │  │  password       │      │  description?   │                       │
//! │  │  created_at     │      │  price_cents    │                       │
//! │  └─────────────────┘      │  quantity       │                       │
//! │                           │  owner_email ───┼── implicit FK         │
//! │                           │  created_at     │   (app-level only)    │
//! │                           └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - `User` is keyed by its email (the business identifier)
//! - `Product` is keyed by a store-assigned auto-incrementing integer;
//!   a product value without an id yet is a [`NewProduct`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// User
// =============================================================================

/// A registered account.
///
/// ## Security Note
/// The password is stored and compared in plaintext. Stockbook is a local
/// single-user demo and keeps that property on purpose; do not reuse this
/// type in anything real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Display name shown in the products view header.
    pub name: String,

    /// Email address - the unique business identifier.
    pub email: String,

    /// Plaintext password (see security note above).
    pub password: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user record stamped with the current time.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        User {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    /// Checks a login attempt against the stored password.
    ///
    /// Case-sensitive exact string match; the caller must not reveal
    /// whether the email or the password was the mismatch.
    #[inline]
    pub fn password_matches(&self, attempt: &str) -> bool {
        self.password == attempt
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier (auto-incrementing, unique, monotonic).
    pub id: i64,

    /// Display name shown in the product table.
    pub name: String,

    /// Optional description (rendered as "-" when absent).
    pub description: Option<String>,

    /// Price in centavos (smallest currency unit).
    pub price_cents: i64,

    /// Units in stock.
    pub quantity: i64,

    /// Email of the owning user (implicit foreign key, app-enforced).
    pub owner_email: String,

    /// When the product was added.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the total value of this stock line (price × quantity).
    #[inline]
    pub fn line_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// A product about to be inserted - everything but the store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub quantity: i64,
    pub owner_email: String,
}

impl NewProduct {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_match_is_exact() {
        let user = User::new("Demo User", "demo@email.com", "123456");
        assert!(user.password_matches("123456"));
        assert!(!user.password_matches("123457"));
        assert!(!user.password_matches("123456 "));
        assert!(!user.password_matches("SecreT"));
    }

    #[test]
    fn test_product_money_accessors() {
        let product = Product {
            id: 1,
            name: "X".to_string(),
            description: None,
            price_cents: 999,
            quantity: 3,
            owner_email: "demo@email.com".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(product.price().to_string(), "R$ 9.99");
        assert_eq!(product.line_value().cents(), 2997);
    }
}
