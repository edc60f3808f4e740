//! # Demo Data Seeder
//!
//! Populates the ledger database with demo furniture products.
//!
//! ## Usage
//! ```bash
//! # Seed 50 products into ./oakline_dev.db (defaults)
//! cargo run -p oakline-db --bin seed
//!
//! # Custom amount and database path
//! cargo run -p oakline-db --bin seed -- --count 100 --db ./data/oakline.db
//! ```
//!
//! Seeding is skipped when the catalog already has products; delete the
//! database file to regenerate.

use std::env;

use tracing_subscriber::EnvFilter;

use oakline_core::LOW_STOCK_THRESHOLD;
use oakline_db::seed::{seed_demo_catalog, DEMO_PRODUCT_COUNT};
use oakline_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = DEMO_PRODUCT_COUNT;
    let mut db_path = String::from("./oakline_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(DEMO_PRODUCT_COUNT);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Oakline Demo Data Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to seed (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./oakline_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Oakline Demo Data Seeder");
    println!("========================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("* Connected to database");
    println!("* Migrations applied");
    println!();

    let seeded = seed_demo_catalog(&db, count).await?;
    if seeded == 0 {
        println!("! Catalog already has products, skipping seed.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!("* Seeded {} products", seeded);

    // Quick sanity pass over the fresh catalog
    let low = db.products().list_low_stock(LOW_STOCK_THRESHOLD).await?;
    println!("  Low stock (<= {}): {} products", LOW_STOCK_THRESHOLD, low.len());

    let catalog = db.products().list().await?;
    println!("  Catalog total: {} products", catalog.len());

    println!();
    println!("* Seed complete!");

    Ok(())
}
