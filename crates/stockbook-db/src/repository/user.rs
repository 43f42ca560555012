//! # User Repository
//!
//! Database operations for the `users` collection.
//!
//! Users are keyed by email. They are created at registration and never
//! mutated or deleted afterwards, so the whole surface is a point lookup,
//! an insert, and a diagnostic count.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockbook_core::User;

/// Repository for user database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.users();
///
/// if repo.get_by_email(email).await?.is_none() {
///     repo.insert(&user).await?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Point lookup by email (the primary key).
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no such email (benign: login treats it the same as
    ///   a wrong password)
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<User>> {
        debug!(email = %email, "Looking up user");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT name, email, password, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user.
    ///
    /// ## Returns
    /// * `Ok(())` - inserted
    /// * `Err(DbError::UniqueViolation)` - email already registered; the
    ///   register flow hits this only when it loses the check-then-insert
    ///   race
    pub async fn insert(&self, user: &User) -> DbResult<()> {
        debug!(email = %user.email, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (email, name, password, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts registered users (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let db = test_db().await;

        let user = User::new("Ana", "ana@example.com", "s3cret");
        db.users().insert(&user).await.unwrap();

        let found = db
            .users()
            .get_by_email("ana@example.com")
            .await
            .unwrap()
            .expect("inserted user is found");
        assert_eq!(found.name, "Ana");
        assert!(found.password_matches("s3cret"));
    }

    #[tokio::test]
    async fn test_lookup_missing_is_none() {
        let db = test_db().await;

        let found = db.users().get_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = test_db().await;

        let user = User::new("Ana", "ana@example.com", "s3cret");
        db.users().insert(&user).await.unwrap();

        let again = User::new("Other Ana", "ana@example.com", "other");
        let err = db.users().insert(&again).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        // The store retains exactly one record for that email
        // (plus the seeded demo account).
        assert_eq!(db.users().count().await.unwrap(), 2);
    }
}
