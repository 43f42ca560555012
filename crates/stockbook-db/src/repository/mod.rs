//! # Repository Module
//!
//! Database repository implementations for Stockbook.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Controller flow                                                    │
//! │       │                                                             │
//! │       │  db.products().list_by_owner("demo@email.com")              │
//! │       ▼                                                             │
//! │  ProductRepository                                                  │
//! │  ├── insert(&self, new_product)                                     │
//! │  ├── list_by_owner(&self, email)                                    │
//! │  └── delete(&self, id)                                              │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Clean separation of concerns                                     │
//! │  • Every operation is one atomic single-record request              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No multi-record transactions are composed across operations: a read
//! followed by a write (as in registration) is two independent requests
//! with a documented race window.
//!
//! ## Available Repositories
//!
//! - [`UserRepository`] - user point lookup and insert
//! - [`ProductRepository`] - product insert, per-owner listing, delete

pub mod product;
pub mod user;

pub use product::ProductRepository;
pub use user::UserRepository;
