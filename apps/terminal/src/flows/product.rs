//! # Product Flows
//!
//! Add, list, and delete products for the logged-in user.
//!
//! Every flow requires a session: the owner of a new product is always
//! the session's email, which is how referential integrity is kept
//! without a foreign-key constraint (the session user was read from the
//! store moments ago).
//!
//! Deletion is confirmed by the presentation before the flow is called,
//! and the presentation reloads the full list afterwards - there is no
//! optimistic local update.

use tracing::debug;

use stockbook_core::validation::{
    validate_description, validate_price_cents, validate_product_name, validate_quantity,
};
use stockbook_core::{Money, NewProduct, Product};

use crate::error::AppError;
use crate::state::App;

/// Parsed input for the add-product flow.
#[derive(Debug, Clone)]
pub struct NewProductInput {
    pub name: String,
    /// Empty or whitespace-only input becomes `None`.
    pub description: Option<String>,
    pub price: Money,
    pub quantity: i64,
}

/// Adds a product owned by the current session's user.
pub async fn add_product(app: &App, input: NewProductInput) -> Result<Product, AppError> {
    let user = app.current_user().ok_or_else(AppError::not_logged_in)?;

    let name = input.name.trim();
    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    validate_product_name(name)?;
    validate_description(description.as_deref())?;
    validate_price_cents(input.price.cents())?;
    validate_quantity(input.quantity)?;

    debug!(name = %name, owner = %user.email, "Adding product");

    let product = app
        .db()
        .products()
        .insert(&NewProduct {
            name: name.to_string(),
            description,
            price_cents: input.price.cents(),
            quantity: input.quantity,
            owner_email: user.email.clone(),
        })
        .await?;

    Ok(product)
}

/// Lists the products owned by the current session's user.
///
/// An empty result is not an error; the presentation renders a
/// placeholder row instead.
pub async fn list_products(app: &App) -> Result<Vec<Product>, AppError> {
    let user = app.current_user().ok_or_else(AppError::not_logged_in)?;
    Ok(app.db().products().list_by_owner(&user.email).await?)
}

/// Deletes a product by id, restricted to the session user's own rows.
///
/// Succeeds even when the id does not exist - the storage delete is a
/// no-op for missing keys. An id owned by a different user is treated the
/// same way: the caller only ever sees ids from their own rendered list,
/// so both cases are "not one of yours" and change nothing.
pub async fn delete_product(app: &App, id: i64) -> Result<(), AppError> {
    let user = app.current_user().ok_or_else(AppError::not_logged_in)?;

    match app.db().products().get_by_id(id).await? {
        Some(product) if product.owner_email == user.email => {
            debug!(id = id, "Deleting product");
            app.db().products().delete(id).await?;
        }
        _ => {
            debug!(id = id, "Delete skipped: no such product for this user");
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::flows::auth;
    use stockbook_db::{Database, DbConfig, SessionStore};

    async fn logged_in_app(tag: &str, email: &str) -> (App, SessionStore) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let store = SessionStore::new(std::env::temp_dir().join(format!(
            "stockbook-product-{}-{}-{}.json",
            tag,
            std::process::id(),
            nanos
        )));
        let mut app = App::new(db, store.clone());
        app.restore_session().unwrap();

        if email != "demo@email.com" {
            auth::register(&mut app, "Test User", email, "pw").await.unwrap();
            auth::login(&mut app, email, "pw").await.unwrap();
        } else {
            auth::login(&mut app, "demo@email.com", "123456").await.unwrap();
        }

        (app, store)
    }

    fn input(name: &str, price_cents: i64, quantity: i64) -> NewProductInput {
        NewProductInput {
            name: name.to_string(),
            description: None,
            price: Money::from_cents(price_cents),
            quantity,
        }
    }

    fn cleanup(store: &SessionStore) {
        let _ = std::fs::remove_file(store.path());
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (app, store) = logged_in_app("add-list", "demo@email.com").await;

        let product = add_product(&app, input("X", 999, 3)).await.unwrap();
        assert_eq!(product.owner_email, "demo@email.com");
        assert_eq!(product.price().to_string(), "R$ 9.99");

        let listed = list_products(&app).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "X");
        assert_eq!(listed[0].quantity, 3);

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_ownership_isolation() {
        let (mut app, store) = logged_in_app("isolation", "a@example.com").await;

        add_product(&app, input("A's product", 999, 1)).await.unwrap();

        // Switch to a different account on the same store.
        auth::logout(&mut app).unwrap();
        auth::register(&mut app, "B", "b@example.com", "pw").await.unwrap();
        auth::login(&mut app, "b@example.com", "pw").await.unwrap();

        let b_list = list_products(&app).await.unwrap();
        assert!(b_list.is_empty(), "user B must not see user A's products");

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_set_unchanged() {
        let (app, store) = logged_in_app("delete-missing", "demo@email.com").await;

        let kept = add_product(&app, input("Kept", 500, 2)).await.unwrap();
        delete_product(&app, kept.id + 99).await.unwrap();

        let listed = list_products(&app).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept.id);

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_delete_ignores_other_owners_products() {
        let (mut app, store) = logged_in_app("cross-owner", "a@example.com").await;

        let a_product = add_product(&app, input("A's product", 999, 1)).await.unwrap();

        auth::logout(&mut app).unwrap();
        auth::register(&mut app, "B", "b@example.com", "pw").await.unwrap();
        auth::login(&mut app, "b@example.com", "pw").await.unwrap();

        // B knows A's id but must not be able to remove the row.
        delete_product(&app, a_product.id).await.unwrap();

        auth::logout(&mut app).unwrap();
        auth::login(&mut app, "a@example.com", "pw").await.unwrap();
        let a_list = list_products(&app).await.unwrap();
        assert_eq!(a_list.len(), 1);
        assert_eq!(a_list[0].id, a_product.id);

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let (app, store) = logged_in_app("delete-reload", "demo@email.com").await;

        let first = add_product(&app, input("First", 100, 1)).await.unwrap();
        let second = add_product(&app, input("Second", 200, 1)).await.unwrap();

        delete_product(&app, first.id).await.unwrap();

        let listed = list_products(&app).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, second.id);

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_description_normalization() {
        let (app, store) = logged_in_app("description", "demo@email.com").await;

        let blank = NewProductInput {
            name: "No description".to_string(),
            description: Some("   ".to_string()),
            price: Money::from_cents(100),
            quantity: 1,
        };
        let product = add_product(&app, blank).await.unwrap();
        assert_eq!(product.description, None);

        cleanup(&store);
    }

    #[tokio::test]
    async fn test_flows_require_session() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = SessionStore::new(std::env::temp_dir().join(format!(
            "stockbook-product-nosession-{}.json",
            std::process::id()
        )));
        let app = App::new(db, store);

        let err = list_products(&app).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);

        let err = add_product(&app, input("X", 1, 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);

        let err = delete_product(&app, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_input() {
        let (app, store) = logged_in_app("invalid", "demo@email.com").await;

        let err = add_product(&app, input("", 100, 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_product(&app, input("X", 100, 0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_product(&app, input("X", -1, 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(list_products(&app).await.unwrap().is_empty());

        cleanup(&store);
    }
}
