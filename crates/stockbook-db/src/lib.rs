//! # stockbook-db: Persistence Layer for Stockbook
//!
//! This crate provides durable storage for Stockbook: a local SQLite
//! datastore (via sqlx) holding the `users` and `products` collections,
//! and a file-backed session slot mirroring the logged-in user.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Stockbook Data Flow                           │
//! │                                                                     │
//! │  Controller flow (login / register / add / list / delete)           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  stockbook-db (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │  ┌────────────┐  ┌──────────────┐  ┌──────────────────┐    │   │
//! │  │  │  Database  │  │ Repositories │  │   SessionStore   │    │   │
//! │  │  │ (pool.rs)  │  │ users/       │  │ currentUser.json │    │   │
//! │  │  │ SqlitePool │◄─│ products     │  │ (durable current │    │   │
//! │  │  │            │  │              │  │  -user slot)     │    │   │
//! │  │  └────────────┘  └──────────────┘  └──────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  product_management.db (SQLite, WAL) + currentUser.json             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (users, products)
//! - [`session`] - Durable current-user slot
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockbook_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/product_management.db")).await?;
//! let user = db.users().get_by_email("demo@email.com").await?;
//! let products = db.products().list_by_owner("demo@email.com").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use session::SessionStore;

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
