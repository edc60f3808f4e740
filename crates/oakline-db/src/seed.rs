//! # Demo Catalog Seeding
//!
//! Populates an empty catalog with ~50 furniture products for development
//! and demos. The data is deterministic (index arithmetic, no RNG) so every
//! seeded database looks the same.
//!
//! Seeding is guarded: a non-empty catalog is left untouched. The batch is
//! written in one transaction and audited as a single `seed_test_data`
//! entry rather than 50 `add_product` entries.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, LedgerResult};
use crate::pool::Database;
use crate::repository::log;
use oakline_core::NewProduct;

/// Default number of demo products.
pub const DEMO_PRODUCT_COUNT: usize = 50;

/// Base name / category pairs; variants cycle through these.
const CATALOG: &[(&str, &str)] = &[
    ("Sliding Wardrobe", "Wardrobe"),
    ("Corner Wardrobe", "Wardrobe"),
    ("Writing Desk", "Table"),
    ("Dining Table", "Table"),
    ("Coffee Table", "Table"),
    ("Kitchen Chair", "Chair"),
    ("Office Chair", "Chair"),
    ("Narrow Dresser", "Dresser"),
    ("Wide Dresser", "Dresser"),
    ("Corner Sofa", "Sofa"),
    ("Sofa Bed", "Sofa"),
    ("Soft Armchair", "Armchair"),
    ("Office Armchair", "Armchair"),
    ("Single Bed", "Bed"),
    ("Double Bed", "Bed"),
    ("Nightstand", "Cabinet"),
    ("TV Stand", "Cabinet"),
    ("Wall Shelves", "Shelving"),
    ("Kitchen Set Small", "Kitchen"),
    ("Kitchen Set Large", "Kitchen"),
];

const MATERIALS: &[&str] = &["Chipboard", "Solid Wood", "MDF Veneer", "Metal & Fabric"];
const COLORS: &[&str] = &["White", "Sonoma Oak", "Walnut", "Grey", "Black"];
const WIDTHS: &[f64] = &[60.0, 80.0, 100.0, 120.0, 140.0, 160.0, 180.0, 200.0];
const HEIGHTS: &[f64] = &[40.0, 50.0, 75.0, 90.0, 200.0];
const DEPTHS: &[f64] = &[35.0, 40.0, 45.0, 60.0];
const PRICES: &[f64] = &[2500.0, 3200.0, 4500.0, 5200.0, 6300.0, 7800.0, 9100.0];

/// Seeds `count` demo products into an empty catalog.
///
/// ## Returns
/// The number of products inserted: `count` on a fresh database, 0 when the
/// catalog already has products.
pub async fn seed_demo_catalog(db: &Database, count: usize) -> LedgerResult<usize> {
    if db.products().count().await? > 0 {
        info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let pool: &SqlitePool = db.pool();
    let mut tx = pool.begin().await.map_err(DbError::from)?;

    for i in 0..count {
        let product = demo_product(i);

        sqlx::query(
            r#"
            INSERT INTO products
                (name, category, material, color,
                 width, height, depth, base_price, stock_qty)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.category.as_str())
        .bind(product.material.as_deref())
        .bind(product.color.as_deref())
        .bind(product.width)
        .bind(product.height)
        .bind(product.depth)
        .bind(product.base_price)
        .bind(product.stock_qty)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;
    }

    tx.commit().await.map_err(DbError::from)?;

    log::record(
        pool,
        "seed_test_data",
        format!("Seeded {count} demo products"),
    )
    .await;

    info!(count = count, "Demo catalog seeded");
    Ok(count)
}

/// Builds the i-th demo product.
fn demo_product(i: usize) -> NewProduct {
    let (base_name, category) = CATALOG[i % CATALOG.len()];
    let variant = i / CATALOG.len() + 1;

    NewProduct {
        name: format!("{base_name} #{variant}"),
        category: category.to_string(),
        material: Some(MATERIALS[(i * 7 + 3) % MATERIALS.len()].to_string()),
        color: Some(COLORS[(i * 3 + 1) % COLORS.len()].to_string()),
        width: Some(WIDTHS[(i * 5) % WIDTHS.len()]),
        height: Some(HEIGHTS[(i * 11 + 2) % HEIGHTS.len()]),
        depth: Some(DEPTHS[(i * 13 + 1) % DEPTHS.len()]),
        base_price: PRICES[(i * 17) % PRICES.len()],
        stock_qty: ((i * 13 + 5) % 21) as i64,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
