//! # Controller Flows
//!
//! The application's user-facing actions as plain async functions over
//! the explicit [`crate::state::App`] context.
//!
//! ```text
//! user input ──► flow ──► repository ──► flow ──► rendered output
//! ```
//!
//! Flows never touch the terminal. They take parsed input, call the
//! persistence layer, mutate the context, and return `Result<_, AppError>`;
//! the presentation decides how to show either side. This keeps every
//! flow testable against an in-memory database.
//!
//! - [`auth`] - login, register, logout
//! - [`product`] - add, list, delete

pub mod auth;
pub mod product;
