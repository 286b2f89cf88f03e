//! # Seed Data Generator
//!
//! Populates the database with the sample products used in development.
//!
//! ## Usage
//! ```bash
//! cargo run -p sellhub-db --bin seed
//!
//! # Specify database path
//! cargo run -p sellhub-db --bin seed -- --db ./data/inventory.db
//! ```

use anyhow::Context;
use sellhub_core::NewProduct;
use sellhub_db::{Database, DbConfig};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample products: (name, inventory count)
const SAMPLE_PRODUCTS: &[(&str, i64)] = &[("Product 1", 5), ("Product 2", 10), ("Product 3", 2)];

const DEFAULT_DB_PATH: &str = "./data/inventory.db";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Sellhub Inventory Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let db = Database::new(DbConfig::new(&db_path))
        .await
        .with_context(|| format!("opening {db_path}"))?;
    info!(path = %db_path, "Connected to database, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, skipping seed");
        return Ok(());
    }

    for (name, count) in SAMPLE_PRODUCTS {
        let product = db
            .products()
            .insert(&NewProduct::new(*name, *count))
            .await
            .with_context(|| format!("inserting {name}"))?;
        info!(id = %product.id, name = %product.name, inventory_count = product.inventory_count, "Seeded product");
    }

    info!(count = SAMPLE_PRODUCTS.len(), "Seeding completed");
    db.close().await;

    Ok(())
}
