//! # Seed Data Generator
//!
//! Populates a Stockbook database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Seed 12 products (default) into ./product_management.db
//! cargo run -p stockbook-db --bin seed
//!
//! # Custom amount and database path
//! cargo run -p stockbook-db --bin seed -- --count 30 --db ./data/product_management.db
//! ```
//!
//! All seeded products belong to the demo account
//! (`demo@email.com`), which the initial migration guarantees exists.

use std::env;

use stockbook_core::{NewProduct, DEMO_USER_EMAIL};
use stockbook_db::{Database, DbConfig};

/// Sample catalog: (name, description, price in centavos, quantity).
const SAMPLES: &[(&str, Option<&str>, i64, i64)] = &[
    ("Notebook 14\"", Some("8 GB RAM, 256 GB SSD"), 349_900, 5),
    ("Wireless Mouse", Some("2.4 GHz, USB receiver"), 7_990, 30),
    ("Mechanical Keyboard", Some("ABNT2 layout"), 25_990, 12),
    ("USB-C Cable", Some("1 m, braided"), 2_490, 80),
    ("Monitor 24\"", Some("1080p IPS"), 89_900, 7),
    ("Webcam", None, 15_900, 15),
    ("Headset", Some("With microphone"), 19_900, 20),
    ("External HD 1 TB", None, 32_900, 9),
    ("Smartphone Stand", None, 3_490, 50),
    ("Power Strip", Some("6 outlets"), 5_990, 25),
    ("HDMI Adapter", None, 4_990, 40),
    ("Laptop Sleeve", Some("Fits up to 15\""), 8_990, 18),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (db_path, count) = parse_args();
    println!("Seeding {} products into {}", count, db_path);

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.products();

    for i in 0..count {
        let (name, description, price_cents, quantity) = SAMPLES[i % SAMPLES.len()];
        let suffix = if i >= SAMPLES.len() {
            format!(" #{}", i / SAMPLES.len() + 1)
        } else {
            String::new()
        };

        let product = repo
            .insert(&NewProduct {
                name: format!("{}{}", name, suffix),
                description: description.map(str::to_string),
                price_cents,
                quantity,
                owner_email: DEMO_USER_EMAIL.to_string(),
            })
            .await?;
        println!("  [{}] {} - {}", product.id, product.name, product.price());
    }

    println!("Done. Login as {} to see the seeded products.", DEMO_USER_EMAIL);
    Ok(())
}

/// Parses `--db <path>` and `--count <n>` from the command line.
fn parse_args() -> (String, usize) {
    let mut db_path = "./product_management.db".to_string();
    let mut count = SAMPLES.len();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" if i + 1 < args.len() => {
                db_path = args[i + 1].clone();
                i += 2;
            }
            "--count" if i + 1 < args.len() => {
                count = args[i + 1].parse().unwrap_or(count);
                i += 2;
            }
            _ => i += 1,
        }
    }

    (db_path, count)
}
