//! # Seed Data Generator
//!
//! Populates the database with branches and catalog products for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p aisle-db --bin seed
//!
//! # Specify database path
//! cargo run -p aisle-db --bin seed -- --db ./data/aisle.db
//! ```
//!
//! Seeding goes through the same get-or-create paths as the services, so
//! running it twice is harmless: existing branches and products are left
//! untouched (including their prices).

use std::env;

use aisle_core::Money;
use aisle_db::{Database, DbConfig};
use tracing::info;

/// Branch codes for the development fleet.
const BRANCHES: &[&str] = &["SMKT001", "SMKT002", "SMKT003", "SMKT004", "SMKT005"];

/// Catalog products with prices in (major, minor) units.
const PRODUCTS: &[(&str, i64, i64)] = &[
    ("Milk", 2, 50),
    ("Bread", 1, 20),
    ("Eggs", 3, 10),
    ("Butter", 2, 95),
    ("Cheese", 4, 80),
    ("Apples", 2, 30),
    ("Bananas", 1, 10),
    ("Oranges", 2, 60),
    ("Rice", 1, 90),
    ("Pasta", 1, 40),
    ("Tomato Sauce", 2, 15),
    ("Olive Oil", 6, 50),
    ("Coffee", 7, 20),
    ("Tea", 3, 40),
    ("Sugar", 1, 5),
    ("Flour", 1, 30),
    ("Chicken Breast", 8, 90),
    ("Ground Beef", 7, 60),
    ("Salmon", 12, 0),
    ("Yogurt", 1, 80),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aisle POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: AISLE_DATABASE_PATH or ./aisle.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = match db_path {
        Some(path) => DbConfig::new(path),
        None => DbConfig::from_env()?,
    };

    println!("Aisle POS Seed Data Generator");
    println!("=============================");
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    for code in BRANCHES {
        let branch = db.branches().get_or_create(code).await?;
        info!(branch_id = %branch.id, "seeded branch");
    }
    println!("✓ Seeded {} branches", BRANCHES.len());

    for (name, major, minor) in PRODUCTS {
        let product = db
            .products()
            .get_or_create(name, Money::from_major_minor(*major, *minor))
            .await?;
        info!(product = %product.name, price = %product.unit_price(), "seeded product");
    }
    println!("✓ Seeded {} products", PRODUCTS.len());

    let branches = db.branches().count().await?;
    let products = db.products().count().await?;
    println!();
    println!("✓ Seed complete: {} branches, {} products in catalog", branches, products);

    Ok(())
}
