//! # Product Repository
//!
//! Database operations for the furniture catalog.
//!
//! ## Key Operations
//! - CRUD with full-field replace on update
//! - Filtered listing (name/category substring, inclusive price range)
//! - Low-stock listing for replenishment alerts
//!
//! Deletion is guarded: a product that any sale references cannot be
//! removed, so sale history never dangles. Names are intentionally not
//! unique; the catalog routinely carries variants under the same name.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult, LedgerResult};
use crate::repository::log;
use oakline_core::error::CoreError;
use oakline_core::validation::validate_new_product;
use oakline_core::{LowStockProduct, NewProduct, Product, ProductFilter};

const PRODUCT_COLUMNS: &str =
    "id, name, category, material, color, width, height, depth, base_price, stock_qty";

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.insert(&NewProduct::new("Oak Desk", "Desk", 4500.0)).await?;
/// let catalog = repo.list().await?;
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

    /// Inserts a new catalog product.
    ///
    /// Validates the draft first (required name/category, non-negative
    /// price and stock, positive dimensions when present). Stock defaults
    /// to 0 when the form leaves it blank. Audits `add_product`.
    ///
    /// ## Returns
    /// The stored product with its assigned id.
    pub async fn insert(&self, draft: &NewProduct) -> LedgerResult<Product> {
        validate_new_product(draft).map_err(CoreError::from)?;

        debug!(name = %draft.name, category = %draft.category, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products
                (name, category, material, color,
                 width, height, depth, base_price, stock_qty)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.category.as_str())
        .bind(draft.material.as_deref())
        .bind(draft.color.as_deref())
        .bind(draft.width)
        .bind(draft.height)
        .bind(draft.depth)
        .bind(draft.base_price)
        .bind(draft.stock_qty)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        let id = result.last_insert_rowid();

        log::record(
            &self.pool,
            "add_product",
            format!(
                "{} ({}), stock={}",
                draft.name, draft.category, draft.stock_qty
            ),
        )
        .await;

        Ok(Product {
            id,
            name: draft.name.clone(),
            category: draft.category.clone(),
            material: draft.material.clone(),
            color: draft.color.clone(),
            width: draft.width,
            height: draft.height,
            depth: draft.depth,
            base_price: draft.base_price,
            stock_qty: draft.stock_qty,
        })
    }

    /// Fully replaces all fields of an existing product.
    ///
    /// Unknown ids are not an error: the update touches no row and `false`
    /// is returned, so the catalog form can re-check its selection. Audits
    /// `update_product`.
    pub async fn update(&self, id: i64, draft: &NewProduct) -> LedgerResult<bool> {
        validate_new_product(draft).map_err(CoreError::from)?;

        debug!(id = %id, name = %draft.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, category = ?3, material = ?4, color = ?5,
                width = ?6, height = ?7, depth = ?8, base_price = ?9, stock_qty = ?10
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.name.as_str())
        .bind(draft.category.as_str())
        .bind(draft.material.as_deref())
        .bind(draft.color.as_deref())
        .bind(draft.width)
        .bind(draft.height)
        .bind(draft.depth)
        .bind(draft.base_price)
        .bind(draft.stock_qty)
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        log::record(
            &self.pool,
            "update_product",
            format!(
                "id={}, {} ({}), stock={}",
                id, draft.name, draft.category, draft.stock_qty
            ),
        )
        .await;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a product with no recorded sales.
    ///
    /// Fails with `ReferentialConflict` while any sale references the id;
    /// the referential check and the delete share one transaction so a sale
    /// registered in between cannot slip through. Deleting an unknown id is
    /// a silent no-op. Audits `delete_product`.
    pub async fn delete(&self, id: i64) -> LedgerResult<()> {
        debug!(id = %id, "Deleting product");

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let sales: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales WHERE product_id = ?1")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::from)?;

        if sales > 0 {
            return Err(CoreError::ReferentialConflict {
                product_id: id,
                sales,
            }
            .into());
        }

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        log::record(&self.pool, "delete_product", format!("id={id}")).await;

        Ok(())
    }

    /// Gets a product by its id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists the whole catalog, ordered by id ascending.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Lists the catalog with optional filters, ordered by id ascending.
    ///
    /// Each present filter field is applied independently; substring
    /// matches use LIKE, price bounds are inclusive.
    pub async fn list_filtered(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        debug!(?filter, "Listing products with filter");

        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE 1=1"
        ));

        if let Some(name) = &filter.name_contains {
            query.push(" AND name LIKE ");
            query.push_bind(format!("%{name}%"));
        }
        if let Some(category) = &filter.category_contains {
            query.push(" AND category LIKE ");
            query.push_bind(format!("%{category}%"));
        }
        if let Some(min) = filter.price_min {
            query.push(" AND base_price >= ");
            query.push_bind(min);
        }
        if let Some(max) = filter.price_max {
            query.push(" AND base_price <= ");
            query.push_bind(max);
        }

        query.push(" ORDER BY id");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Lists products at or below the stock threshold, lowest stock first.
    ///
    /// The reports tab uses this for replenishment alerts.
    pub async fn list_low_stock(&self, threshold: i64) -> DbResult<Vec<LowStockProduct>> {
        let products = sqlx::query_as::<_, LowStockProduct>(
            r#"
            SELECT id, name, category, stock_qty
            FROM products
            WHERE stock_qty <= ?1
            ORDER BY stock_qty ASC
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts catalog products (used by the seed guard and diagnostics).
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
