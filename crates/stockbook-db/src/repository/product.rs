//! # Product Repository
//!
//! Database operations for the `products` collection.
//!
//! ## Key Operations
//! - Insert with store-assigned auto-incrementing id
//! - Per-owner listing through the `owner_email` secondary index
//! - Delete by id (a no-op when the id is absent)
//!
//! ## Per-Owner Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │               How the owner index is used                           │
//! │                                                                     │
//! │  list_by_owner("demo@email.com")                                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  idx_products_owner_email (secondary, non-unique)                   │
//! │       │                                                             │
//! │  id │ name     │ owner_email                                        │
//! │   1 │ Notebook │ demo@email.com   ← MATCH                           │
//! │   2 │ Mouse    │ ana@example.com                                    │
//! │   3 │ Cable    │ demo@email.com   ← MATCH                           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Results: [1, 3] in id (insertion) order                            │
//! │                                                                     │
//! │  Order is an implementation detail, not a guarantee.                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockbook_core::{NewProduct, Product};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.insert(&new_product).await?;
/// let mine = repo.list_by_owner(&product.owner_email).await?;
/// repo.delete(product.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with the store-assigned id.
    ///
    /// Ids are unique and monotonically assigned by SQLite
    /// (AUTOINCREMENT); the caller never chooses one.
    pub async fn insert(&self, new_product: &NewProduct) -> DbResult<Product> {
        debug!(name = %new_product.name, owner = %new_product.owner_email, "Inserting product");

        let created_at = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price_cents, quantity, owner_email, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price_cents)
        .bind(new_product.quantity)
        .bind(&new_product.owner_email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id = id, "Product inserted");

        Ok(Product {
            id,
            name: new_product.name.clone(),
            description: new_product.description.clone(),
            price_cents: new_product.price_cents,
            quantity: new_product.quantity,
            owner_email: new_product.owner_email.clone(),
            created_at,
        })
    }

    /// Lists all products owned by the given email.
    ///
    /// Uses the `owner_email` secondary index. Returned in id (insertion)
    /// order; callers must treat the order as unspecified.
    pub async fn list_by_owner(&self, owner_email: &str) -> DbResult<Vec<Product>> {
        debug!(owner = %owner_email, "Listing products by owner");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, quantity, owner_email, created_at
            FROM products
            WHERE owner_email = ?1
            ORDER BY id
            "#,
        )
        .bind(owner_email)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listing returned products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - product found
    /// * `Ok(None)` - product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price_cents, quantity, owner_email, created_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Deletes a product by its primary key.
    ///
    /// Succeeds even when the id is absent - no existence check is
    /// performed, matching the storage contract (delete of a missing id
    /// is benign).
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Delete complete");
        Ok(())
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sample(name: &str, owner: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: None,
            price_cents: 999,
            quantity: 3,
            owner_email: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_ids() {
        let db = test_db().await;
        let repo = db.products();

        let first = repo.insert(&sample("A", "demo@email.com")).await.unwrap();
        let second = repo.insert(&sample("B", "demo@email.com")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_by_owner_isolates_owners() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&sample("A's product", "a@example.com")).await.unwrap();
        repo.insert(&sample("B's product", "b@example.com")).await.unwrap();

        let a_list = repo.list_by_owner("a@example.com").await.unwrap();
        assert_eq!(a_list.len(), 1);
        assert_eq!(a_list[0].name, "A's product");

        let b_list = repo.list_by_owner("b@example.com").await.unwrap();
        assert_eq!(b_list.len(), 1);
        assert_eq!(b_list[0].name, "B's product");

        assert!(repo.list_by_owner("c@example.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let db = test_db().await;
        let repo = db.products();

        let product = repo.insert(&sample("Gone soon", "demo@email.com")).await.unwrap();
        repo.delete(product.id).await.unwrap();

        assert!(repo.get_by_id(product.id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let db = test_db().await;
        let repo = db.products();

        let kept = repo.insert(&sample("Kept", "demo@email.com")).await.unwrap();

        // Deleting an id that does not exist completes without error
        // and leaves the existing set unchanged.
        repo.delete(kept.id + 1000).await.unwrap();

        let remaining = repo.list_by_owner("demo@email.com").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_fields() {
        let db = test_db().await;
        let repo = db.products();

        let new_product = NewProduct {
            name: "Notebook".to_string(),
            description: Some("14 inch".to_string()),
            price_cents: 349_900,
            quantity: 2,
            owner_email: "demo@email.com".to_string(),
        };
        let inserted = repo.insert(&new_product).await.unwrap();

        let fetched = repo
            .get_by_id(inserted.id)
            .await
            .unwrap()
            .expect("inserted product is found");
        assert_eq!(fetched.id, inserted.id);
        assert_eq!(fetched.name, "Notebook");
        assert_eq!(fetched.description.as_deref(), Some("14 inch"));
        assert_eq!(fetched.price_cents, 349_900);
        assert_eq!(fetched.quantity, 2);
        assert_eq!(fetched.owner_email, "demo@email.com");
    }
}
