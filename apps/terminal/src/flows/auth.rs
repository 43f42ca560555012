//! # Authentication Flows
//!
//! Login, registration, and logout.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  users().get_by_email(email)                                        │
//! │       │                                                             │
//! │       ├── None ───────────────────────────┐                         │
//! │       │                                   ▼                         │
//! │       ├── Some(user), password mismatch ──► InvalidCredentials      │
//! │       │                                     (one generic message    │
//! │       │                                      for both cases)        │
//! │       ▼                                                             │
//! │  Some(user), exact match                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  persist session slot, view = Products                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registration Race
//! The existence check and the insert are two independent storage
//! operations. Two concurrent registrations of the same email can both
//! pass the check; the loser's insert fails on the UNIQUE constraint and
//! is reported as a generic creation failure, not as a duplicate.

use tracing::debug;

use stockbook_core::validation::{validate_email, validate_password, validate_user_name};
use stockbook_core::User;

use crate::error::{AppError, ErrorCode};
use crate::state::App;

/// Attempts to log in with the given credentials.
///
/// On success the session is recorded (memory + durable slot) and the
/// view becomes Products. On failure the caller gets one generic
/// invalid-credentials error; unknown email and wrong password are
/// deliberately indistinguishable.
pub async fn login(app: &mut App, email: &str, password: &str) -> Result<(), AppError> {
    let email = email.trim();
    debug!(email = %email, "Login attempt");

    match app.db().users().get_by_email(email).await? {
        Some(user) if user.password_matches(password) => app.login_succeeded(user),
        _ => Err(AppError::invalid_credentials()),
    }
}

/// Creates a new account.
///
/// Validates the fields, checks for an existing account (read), then
/// inserts (write). On success the view returns to Login so the user can
/// sign in with the new credentials.
pub async fn register(
    app: &mut App,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    let name = name.trim();
    let email = email.trim();

    validate_user_name(name)?;
    validate_email(email)?;
    validate_password(password)?;

    debug!(email = %email, "Registration attempt");

    if app.db().users().get_by_email(email).await?.is_some() {
        return Err(AppError::duplicate_account());
    }

    let user = User::new(name, email, password);
    app.db().users().insert(&user).await.map_err(|e| {
        if e.is_unique_violation() {
            // Lost the check-then-insert race: surface a generic creation
            // failure, not the duplicate-specific message.
            AppError::new(
                ErrorCode::DatabaseError,
                "Could not create the account. Please try again.",
            )
        } else {
            AppError::from(e)
        }
    })?;

    app.show_login();
    Ok(())
}

/// Logs out: clears the in-memory session and the durable slot, and
/// returns to the Login view.
pub fn logout(app: &mut App) -> Result<(), AppError> {
    app.logged_out()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;
    use stockbook_db::{Database, DbConfig, SessionStore};

    async fn test_app(tag: &str) -> (App, SessionStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let store = SessionStore::new(std::env::temp_dir().join(format!(
            "stockbook-auth-{}-{}-{}.json",
            tag,
            std::process::id(),
            nanos
        )));
        let mut app = App::new(db, store.clone());
        app.restore_session().unwrap();
        (app, store)
    }

    fn cleanup(store: &SessionStore) {
        // Throwaway session files should not accumulate in /tmp.
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn test_register_then_login_reaches_products() {
        let (mut app, store) = test_app("register-login").await;

        register(&mut app, "Ana", "ana@example.com", "s3cret")
            .await
            .unwrap();
        // Successful creation navigates back to Login.
        assert_eq!(app.view(), View::Login);
        assert!(app.current_user().is_none());

        login(&mut app, "ana@example.com", "s3cret").await.unwrap();
        assert_eq!(app.view(), View::Products);
        assert_eq!(app.current_user().unwrap().name, "Ana");

        logout(&mut app).unwrap();
        cleanup(&store);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_rejected() {
        let (mut app, store) = test_app("register-dup").await;

        register(&mut app, "Ana", "ana@example.com", "s3cret")
            .await
            .unwrap();
        let err = register(&mut app, "Ana Again", "ana@example.com", "other")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateAccount);
        assert_eq!(err.message, "This e-mail is already registered.");

        // Exactly one record for that email (plus the seeded demo user).
        assert_eq!(app.db().users().count().await.unwrap(), 2);
        cleanup(&store);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_generic() {
        let (mut app, store) = test_app("wrong-password").await;

        let err = login(&mut app, "demo@email.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(app.view(), View::Login);
        cleanup(&store);
    }

    #[tokio::test]
    async fn test_login_unknown_email_matches_wrong_password() {
        let (mut app, store) = test_app("unknown-email").await;

        let unknown = login(&mut app, "nobody@example.com", "123456")
            .await
            .unwrap_err();
        let wrong = login(&mut app, "demo@email.com", "wrong")
            .await
            .unwrap_err();

        // The two failure cases must be indistinguishable to the user.
        assert_eq!(unknown, wrong);
        cleanup(&store);
    }

    #[tokio::test]
    async fn test_login_demo_user_from_seed() {
        let (mut app, store) = test_app("demo-login").await;

        login(&mut app, "demo@email.com", "123456").await.unwrap();
        assert_eq!(app.view(), View::Products);

        logout(&mut app).unwrap();
        assert_eq!(app.view(), View::Login);
        cleanup(&store);
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let (mut app, store) = test_app("register-invalid").await;

        let err = register(&mut app, "", "ana@example.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = register(&mut app, "Ana", "not-an-email", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = register(&mut app, "Ana", "ana@example.com", "")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Nothing was inserted beyond the seeded demo user.
        assert_eq!(app.db().users().count().await.unwrap(), 1);
        cleanup(&store);
    }
}
