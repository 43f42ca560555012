//! # Stockbook Terminal
//!
//! Interactive product management over a local SQLite store.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  1. Init tracing (RUST_LOG, default "info,sqlx=warn")               │
//! │  2. Resolve the data directory (STOCKBOOK_DATA_DIR or OS default)   │
//! │  3. Open product_management.db, run migrations (seeds demo user)    │
//! │  4. Restore the session slot → Products or Login                    │
//! │  5. Prompt loop dispatching on the current view                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop only renders and prompts; every action goes through the
//! flows in [`flows`], which carry all the logic and all the tests.

mod error;
mod flows;
mod render;
mod state;

use std::path::PathBuf;

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stockbook_core::Money;
use stockbook_db::{Database, DbConfig, SessionStore};

use crate::error::AppError;
use crate::flows::{auth, product};
use crate::flows::product::NewProductInput;
use crate::state::{App, View};

const DB_FILE_NAME: &str = "product_management.db";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolves the directory holding the database file and the session slot.
///
/// `STOCKBOOK_DATA_DIR` overrides the OS-specific default, which keeps
/// throwaway runs out of the real data directory.
fn data_dir() -> Result<PathBuf, AppError> {
    if let Ok(dir) = std::env::var("STOCKBOOK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    directories::ProjectDirs::from("com", "stockbook", "stockbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AppError::internal("Could not determine a data directory."))
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("{}", e.message.red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let dir = data_dir()?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| AppError::internal(format!("Could not create {}: {}", dir.display(), e)))?;

    let db = Database::new(DbConfig::new(dir.join(DB_FILE_NAME))).await?;
    let store = SessionStore::in_dir(&dir);

    let mut app = App::new(db, store);
    app.restore_session()?;

    info!(data_dir = %dir.display(), "Stockbook started");
    println!("{}", "Stockbook - Product Management".bold());

    loop {
        let keep_going = match app.view() {
            View::Login => login_screen(&mut app).await?,
            View::Register => register_screen(&mut app).await?,
            View::Products => products_screen(&mut app).await?,
        };
        if !keep_going {
            break;
        }
    }

    app.db().close().await;
    Ok(())
}

// =============================================================================
// Screens
// =============================================================================

/// Login view. Returns `false` when the user chose to quit.
async fn login_screen(app: &mut App) -> Result<bool, AppError> {
    println!();
    let choice = select("Login", &["Login", "Create account", "Quit"])?;

    match choice {
        0 => {
            let email: String = prompt_input("E-mail")?;
            let password = prompt_password("Password")?;
            match auth::login(app, &email, &password).await {
                Ok(()) => {
                    let name = app.current_user().map(|u| u.name.clone()).unwrap_or_default();
                    println!("{}", format!("Welcome, {}!", name).green());
                }
                Err(e) => show_error(&e),
            }
        }
        1 => app.show_register(),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Register view. Returns `false` when the user chose to quit.
async fn register_screen(app: &mut App) -> Result<bool, AppError> {
    println!();
    let choice = select("Create account", &["Create account", "Back to login"])?;

    match choice {
        0 => {
            let name: String = prompt_input("Name")?;
            let email: String = prompt_input("E-mail")?;
            let password = prompt_password("Password")?;
            match auth::register(app, &name, &email, &password).await {
                Ok(()) => println!(
                    "{}",
                    "Account created successfully! Log in to continue.".green()
                ),
                Err(e) => show_error(&e),
            }
        }
        _ => app.show_login(),
    }
    Ok(true)
}

/// Products view: renders the list, then prompts for an action.
/// Returns `false` when the user chose to quit.
async fn products_screen(app: &mut App) -> Result<bool, AppError> {
    let name = app.current_user().map(|u| u.name.clone()).unwrap_or_default();
    println!();
    println!("{}", format!("Logged in as {}", name).bold());

    match product::list_products(app).await {
        Ok(products) => print!("{}", render::product_table(&products)),
        Err(e) => show_error(&e),
    }

    let choice = select(
        "Products",
        &["Refresh", "Add product", "Delete product", "Logout", "Quit"],
    )?;

    match choice {
        0 => {} // the loop re-renders the list
        1 => add_product_prompt(app).await,
        2 => delete_product_prompt(app).await,
        3 => {
            auth::logout(app)?;
            println!("{}", "Logged out.".green());
        }
        _ => return Ok(false),
    }
    Ok(true)
}

async fn add_product_prompt(app: &App) {
    let input = match read_new_product() {
        Ok(input) => input,
        Err(e) => {
            show_error(&e);
            return;
        }
    };

    match product::add_product(app, input).await {
        Ok(p) => println!("{}", format!("Added \"{}\" (id {}).", p.name, p.id).green()),
        Err(e) => show_error(&e),
    }
}

fn read_new_product() -> Result<NewProductInput, AppError> {
    let name: String = prompt_input("Product name")?;
    let description: String = prompt_input_allow_empty("Description (optional)")?;
    let price_text: String = prompt_input("Price (e.g. 9.99)")?;
    let price = Money::parse(&price_text)?;
    let quantity: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Quantity")
        .interact_text()
        .map_err(prompt_failed)?;

    Ok(NewProductInput {
        name,
        description: if description.trim().is_empty() {
            None
        } else {
            Some(description)
        },
        price,
        quantity,
    })
}

async fn delete_product_prompt(app: &App) {
    let id: i64 = match Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Product id to delete")
        .interact_text()
        .map_err(prompt_failed)
    {
        Ok(id) => id,
        Err(e) => {
            show_error(&e);
            return;
        }
    };

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to delete this product?")
        .default(false)
        .interact()
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    match product::delete_product(app, id).await {
        Ok(()) => println!("{}", "Product deleted.".green()),
        Err(e) => show_error(&e),
    }
}

// =============================================================================
// Prompt Helpers
// =============================================================================

fn select(prompt: &str, items: &[&str]) -> Result<usize, AppError> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(prompt_failed)
}

fn prompt_input(prompt: &str) -> Result<String, AppError> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_failed)
}

fn prompt_input_allow_empty(prompt: &str) -> Result<String, AppError> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_failed)
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()
        .map_err(prompt_failed)
}

fn prompt_failed(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {}", e))
}

fn show_error(e: &AppError) {
    println!("{}", e.message.red());
}
