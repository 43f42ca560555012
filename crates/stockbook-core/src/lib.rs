//! # stockbook-core: Pure Domain Logic for Stockbook
//!
//! This crate is the heart of Stockbook. It contains the domain types and
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Stockbook Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (Controller)                 │   │
//! │  │      login ──► register ──► products ──► logout             │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ stockbook-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐              │   │
//! │  │   │   types   │  │   money   │  │ validation │              │   │
//! │  │   │   User    │  │   Money   │  │   rules    │              │   │
//! │  │   │  Product  │  │  R$ 9.99  │  │   checks   │              │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS       │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                stockbook-db (Persistence Layer)             │   │
//! │  │        SQLite queries, migrations, session slot             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Product, NewProduct)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Email of the demo account seeded on first database creation.
///
/// The demo account is part of the storage contract: it exists so the app
/// is usable immediately after a fresh install (login with
/// `demo@email.com` / `123456`).
pub const DEMO_USER_EMAIL: &str = "demo@email.com";

/// Maximum quantity accepted for a single product entry.
///
/// Prevents accidental over-entry (e.g., typing 1000000 instead of 10).
pub const MAX_PRODUCT_QUANTITY: i64 = 999_999;
