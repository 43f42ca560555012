//! # App Context
//!
//! The application context: one value owning the database handle, the
//! durable session slot, the in-memory session, and the current view.
//!
//! ## View State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │  startup ──► restore_session()                                      │
//! │                 │ slot present          │ slot absent               │
//! │                 ▼                       ▼                           │
//! │            ┌──────────┐  logout    ┌─────────┐                      │
//! │            │ Products │───────────►│  Login  │                      │
//! │            └──────────┘            └─┬───▲───┘                      │
//! │                 ▲                    │   │                          │
//! │                 │ credential match   │   │ cancel / created         │
//! │                 └────────────────────┤   │                          │
//! │                             navigate ▼   │                          │
//! │                              ┌───────────┴─┐                        │
//! │                              │  Register   │                        │
//! │                              └─────────────┘                        │
//! │                                                                     │
//! │  Exactly one view is active; there are no other states.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-memory session and the durable slot move together: every
//! transition that changes one changes the other, so a restart always
//! lands on the same side of the login boundary.

use tracing::info;

use stockbook_core::User;
use stockbook_db::{Database, SessionStore};

use crate::error::AppError;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Logged out; credential entry.
    Login,
    /// Account creation.
    Register,
    /// Logged in; the product list.
    Products,
}

/// Application context passed explicitly to every flow.
#[derive(Debug)]
pub struct App {
    db: Database,
    session_store: SessionStore,
    session: Option<User>,
    view: View,
}

impl App {
    /// Creates a context in the logged-out state.
    ///
    /// Call [`App::restore_session`] afterwards to honor a persisted
    /// session from a previous run.
    pub fn new(db: Database, session_store: SessionStore) -> Self {
        App {
            db,
            session_store,
            session: None,
            view: View::Login,
        }
    }

    /// Resolves the initial view from the durable session slot.
    ///
    /// Present → Products with that user; absent → Login.
    pub fn restore_session(&mut self) -> Result<(), AppError> {
        match self.session_store.load()? {
            Some(user) => {
                info!(email = %user.email, "Session restored from previous run");
                self.session = Some(user);
                self.view = View::Products;
            }
            None => {
                self.session = None;
                self.view = View::Login;
            }
        }
        Ok(())
    }

    /// Returns the database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Returns the currently active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Returns the logged-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref()
    }

    /// Login → Products: records the session in memory and in the
    /// durable slot.
    pub(crate) fn login_succeeded(&mut self, user: User) -> Result<(), AppError> {
        self.session_store.save(&user)?;
        info!(email = %user.email, "Login successful");
        self.session = Some(user);
        self.view = View::Products;
        Ok(())
    }

    /// Products → Login: clears memory and the durable slot.
    pub(crate) fn logged_out(&mut self) -> Result<(), AppError> {
        self.session_store.clear()?;
        if let Some(user) = self.session.take() {
            info!(email = %user.email, "Logged out");
        }
        self.view = View::Login;
        Ok(())
    }

    /// Login → Register (explicit navigation).
    pub(crate) fn show_register(&mut self) {
        self.view = View::Register;
    }

    /// Register → Login (cancel, or successful account creation).
    pub(crate) fn show_login(&mut self) {
        self.view = View::Login;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
