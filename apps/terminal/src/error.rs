//! # Application Error Type
//!
//! Unified error type for controller flows.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockbook                          │
//! │                                                                     │
//! │  flow (login / register / add / delete)                             │
//! │  Result<T, AppError>                                                │
//! │       │                                                             │
//! │       ├── ValidationError ──► code: VALIDATION_ERROR                │
//! │       ├── DbError ──────────► code: DATABASE_ERROR / ...            │
//! │       └── flow decision ────► code: INVALID_CREDENTIALS / ...       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  presentation renders `message` (red inline status); the code is    │
//! │  for tests and logs, never shown raw to the user                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is terminal for that one user action; there are no
//! retries. The messages deliberately leak nothing: a failed login never
//! says whether the email or the password was wrong.

use stockbook_core::ValidationError;
use stockbook_db::DbError;

/// Error returned from controller flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code for tests and branching
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,
}

/// Error codes for flow results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Login rejected (unknown email OR wrong password - indistinguishable)
    InvalidCredentials,

    /// Registration rejected: the email is already taken
    DuplicateAccount,

    /// Input validation failed
    ValidationError,

    /// A product operation was attempted without a session
    NotLoggedIn,

    /// The datastore could not be opened or reached (fatal at startup)
    StoreUnavailable,

    /// A storage operation failed
    DatabaseError,

    /// Anything else (prompt I/O, serialization)
    Internal,
}

impl AppError {
    /// Creates a new application error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// The generic login rejection.
    ///
    /// One message for both "no such user" and "wrong password".
    pub fn invalid_credentials() -> Self {
        AppError::new(ErrorCode::InvalidCredentials, "Incorrect e-mail or password.")
    }

    /// Registration rejection when the pre-check finds the email taken.
    pub fn duplicate_account() -> Self {
        AppError::new(ErrorCode::DuplicateAccount, "This e-mail is already registered.")
    }

    /// A product flow was called with no logged-in user.
    pub fn not_logged_in() -> Self {
        AppError::new(ErrorCode::NotLoggedIn, "You must be logged in to manage products.")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to flow errors, keeping the rule's message.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

/// Converts storage errors to flow errors.
///
/// Detailed storage diagnostics go to the log; the user gets a short
/// generic message.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { field, .. } => {
                // The constraint name is schema detail; log it, don't show it.
                tracing::debug!(field = %field, "Unique constraint violation");
                AppError::new(ErrorCode::ValidationError, "This value is already in use.")
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database unavailable: {}", e);
                AppError::new(
                    ErrorCode::StoreUnavailable,
                    "Could not open the local database.",
                )
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Migration failed: {}", e);
                AppError::new(
                    ErrorCode::StoreUnavailable,
                    "Could not prepare the local database.",
                )
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "The database is busy. Try again.")
            }
            DbError::NotFound { entity, id } => AppError::new(
                ErrorCode::DatabaseError,
                format!("{} not found: {}", entity, id),
            ),
            DbError::SessionStore(e) => {
                tracing::error!("Session store failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Could not persist the session.")
            }
            DbError::QueryFailed(e) | DbError::Internal(e) => {
                tracing::error!("Storage operation failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Storage operation failed.")
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================
