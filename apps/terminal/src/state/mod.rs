//! # Application State
//!
//! The explicit context object passed to every flow, replacing the
//! global-variable session management the app would otherwise grow.
//!
//! - [`App`] - database handle + session store + current session + view
//! - [`View`] - the three mutually exclusive screens

pub mod app;

pub use app::{App, View};
