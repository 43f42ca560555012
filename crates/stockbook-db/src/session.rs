//! # Durable Session Slot
//!
//! Persists the logged-in user's record so a restart restores the
//! products view instead of asking for credentials again.
//!
//! ## Storage Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Data directory                                                     │
//! │  ├── product_management.db   ← the SQLite datastore                 │
//! │  └── currentUser.json        ← THIS MODULE (one serialized User)    │
//! │                                                                     │
//! │  login  ──► save(user)   file written                               │
//! │  start  ──► load()       Some(user) → Products, None → Login        │
//! │  logout ──► clear()      file removed (no-op when absent)           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The slot is a cache of the `users` collection, not a second source of
//! truth: it is only ever written with a record that was just read from
//! or inserted into the store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use stockbook_core::User;

/// File name of the durable slot, after the key it represents.
pub const SESSION_FILE_NAME: &str = "currentUser.json";

/// File-backed slot holding the current session's user record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// Creates a store using the conventional file name inside a data
    /// directory (next to the database file).
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        SessionStore {
            path: dir.as_ref().join(SESSION_FILE_NAME),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session, if any.
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - a session was persisted and parsed
    /// * `Ok(None)` - no file, or the file is unreadable/corrupt (the
    ///   slot is only a cache, so a broken file degrades to logged-out
    ///   rather than failing startup)
    pub fn load(&self) -> DbResult<Option<User>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted session");
                return Ok(None);
            }
            Err(e) => return Err(DbError::SessionStore(e.to_string())),
        };

        match serde_json::from_str::<User>(&contents) {
            Ok(user) => {
                debug!(email = %user.email, "Restored persisted session");
                Ok(Some(user))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session slot");
                Ok(None)
            }
        }
    }

    /// Persists the given user as the current session.
    pub fn save(&self, user: &User) -> DbResult<()> {
        debug!(email = %user.email, path = %self.path.display(), "Persisting session");

        let json = serde_json::to_string_pretty(user)
            .map_err(|e| DbError::SessionStore(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| DbError::SessionStore(e.to_string()))?;

        Ok(())
    }

    /// Clears the persisted session. A no-op when nothing is persisted.
    pub fn clear(&self) -> DbResult<()> {
        debug!(path = %self.path.display(), "Clearing persisted session");

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DbError::SessionStore(e.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn throwaway_store(tag: &str) -> SessionStore {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let path = std::env::temp_dir().join(format!(
            "stockbook-session-{}-{}-{}.json",
            tag,
            std::process::id(),
            nanos
        ));
        SessionStore::new(path)
    }

    #[test]
    fn test_load_absent_is_none() {
        let store = throwaway_store("absent");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let store = throwaway_store("roundtrip");
        let user = User::new("Demo User", "demo@email.com", "123456");

        store.save(&user).unwrap();
        let restored = store.load().unwrap().expect("session restored");
        assert_eq!(restored, user);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_is_noop_when_absent() {
        let store = throwaway_store("clear-noop");
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_slot_degrades_to_logged_out() {
        let store = throwaway_store("corrupt");
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().unwrap().is_none());

        let _ = fs::remove_file(store.path());
    }
}
