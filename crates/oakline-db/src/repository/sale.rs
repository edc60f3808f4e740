//! # Sale Repository
//!
//! Sale registration, joined listings and the revenue report.
//!
//! ## Registration Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    register(&NewSale)                        │
//! │                                                              │
//! │  1. BEGIN                                                    │
//! │  2. Resolve product ──────────── missing? → NotFound         │
//! │  3. Check stock ───────── short? → InsufficientStock         │
//! │  4. charged = base * (1 - discount/100)                      │
//! │  5. UPDATE products SET stock_qty = stock_qty - qty          │
//! │  6. INSERT INTO sales (..., charged, today, customer)        │
//! │  7. COMMIT          ← decrement and insert land together     │
//! │  8. audit "add_sale" (best-effort, outside the transaction)  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure path drops the transaction, so a rejected sale never
//! touches the stock level.

use chrono::Local;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult, LedgerResult};
use crate::repository::log;
use oakline_core::error::CoreError;
use oakline_core::pricing::{charged_unit_price, format_amount, line_total};
use oakline_core::validation::validate_quantity;
use oakline_core::{DailyRevenue, NewSale, Sale, SaleFilter, SaleRecord};

/// Joined sale projection shared by the listing queries.
///
/// `total` is computed in SQL; ordering is most recent first with ties
/// broken by insertion order.
const SALE_RECORD_SELECT: &str = r#"
SELECT s.id,
       s.sale_date,
       p.name AS product_name,
       p.category AS product_category,
       s.quantity,
       s.sale_price,
       s.discount_percent,
       (s.quantity * s.sale_price) AS total,
       s.customer_name
FROM sales s
JOIN products p ON p.id = s.product_id
"#;

/// Repository for sale operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Registers a sale: decrements stock and inserts the sale row as one
    /// atomic unit.
    ///
    /// The unit price defaults to the product's base price unless the order
    /// overrides it; the discount is applied to whichever was used. The
    /// sale is dated today.
    ///
    /// ## Errors
    /// * `NotFound` - unknown product id
    /// * `InsufficientStock` - fewer units on hand than requested; carries
    ///   available vs requested for the sales form
    /// * `Validation` - non-positive quantity
    ///
    /// ## Returns
    /// The joined record of the newly registered sale.
    pub async fn register(&self, order: &NewSale) -> LedgerResult<SaleRecord> {
        validate_quantity(order.quantity).map_err(CoreError::from)?;

        debug!(
            product_id = %order.product_id,
            quantity = %order.quantity,
            discount = %order.discount_percent,
            "Registering sale"
        );

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;

        let product = sqlx::query_as::<_, oakline_core::Product>(
            r#"
            SELECT id, name, category, material, color,
                   width, height, depth, base_price, stock_qty
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(order.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::from)?
        .ok_or(CoreError::ProductNotFound(order.product_id))?;

        if !product.has_stock(order.quantity) {
            return Err(CoreError::InsufficientStock {
                name: product.name,
                available: product.stock_qty,
                requested: order.quantity,
            }
            .into());
        }

        let base_unit_price = order.unit_price.unwrap_or(product.base_price);
        let charged = charged_unit_price(base_unit_price, order.discount_percent);
        let sale_date = Local::now().date_naive();

        sqlx::query("UPDATE products SET stock_qty = stock_qty - ?1 WHERE id = ?2")
            .bind(order.quantity)
            .bind(order.product_id)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;

        let result = sqlx::query(
            r#"
            INSERT INTO sales (product_id, quantity, sale_price,
                               discount_percent, sale_date, customer_name)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(charged)
        .bind(order.discount_percent)
        .bind(sale_date)
        .bind(order.customer_name.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        let sale_id = result.last_insert_rowid();

        tx.commit().await.map_err(DbError::from)?;

        log::record(
            &self.pool,
            "add_sale",
            format!(
                "product_id={}, name={}, qty={}, price={}, discount={:.1}%, customer={}",
                order.product_id,
                product.name,
                order.quantity,
                format_amount(charged),
                order.discount_percent,
                order.customer_name.as_deref().unwrap_or("-"),
            ),
        )
        .await;

        Ok(SaleRecord {
            id: sale_id,
            sale_date,
            product_name: product.name,
            product_category: product.category,
            quantity: order.quantity,
            sale_price: charged,
            discount_percent: order.discount_percent,
            total: line_total(order.quantity, charged),
            customer_name: order.customer_name.clone(),
        })
    }

    /// Gets a stored sale row by id.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, product_id, quantity, sale_price,
                   discount_percent, sale_date, customer_name
            FROM sales
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists sales joined with their products, most recent first.
    ///
    /// `limit`, when given, caps the result count after ordering.
    pub async fn list(&self, limit: Option<u32>) -> DbResult<Vec<SaleRecord>> {
        let filter = SaleFilter {
            limit,
            ..SaleFilter::default()
        };

        self.list_filtered(&filter).await
    }

    /// Lists sales with optional filters, most recent first.
    ///
    /// Product-name and customer substrings use LIKE; date bounds are
    /// inclusive and compare as ISO calendar-date strings.
    pub async fn list_filtered(&self, filter: &SaleFilter) -> DbResult<Vec<SaleRecord>> {
        debug!(?filter, "Listing sales with filter");

        let mut query = QueryBuilder::<Sqlite>::new(SALE_RECORD_SELECT);
        query.push("WHERE 1=1");

        if let Some(name) = &filter.product_contains {
            query.push(" AND p.name LIKE ");
            query.push_bind(format!("%{name}%"));
        }
        if let Some(customer) = &filter.customer_contains {
            query.push(" AND s.customer_name LIKE ");
            query.push_bind(format!("%{customer}%"));
        }
        if let Some(from) = filter.date_from {
            query.push(" AND s.sale_date >= ");
            query.push_bind(from);
        }
        if let Some(to) = filter.date_to {
            query.push(" AND s.sale_date <= ");
            query.push_bind(to);
        }

        query.push(" ORDER BY s.sale_date DESC, s.id DESC");

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ");
            query.push_bind(limit);
        }

        let sales = query
            .build_query_as::<SaleRecord>()
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    /// Revenue grouped by calendar day, most recent day first.
    ///
    /// The only aggregation in the system: `SUM(quantity * sale_price)`
    /// per sale date.
    pub async fn report_total_by_day(&self) -> DbResult<Vec<DailyRevenue>> {
        let rows = sqlx::query_as::<_, DailyRevenue>(
            r#"
            SELECT sale_date,
                   SUM(quantity * sale_price) AS total
            FROM sales
            GROUP BY sale_date
            ORDER BY sale_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::pool::{Database, DbConfig};
    use oakline_core::NewProduct;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn seed_product(db: &Database, name: &str, price: f64, stock: i64) -> i64 {
        let mut draft = NewProduct::new(name, "Sofa", price);
        draft.stock_qty = stock;
        db.products().insert(&draft).await.unwrap().id
    }

    #[tokio::test]
    async fn test_register_decrements_stock_and_inserts_sale() {
        let db = test_db().await;
        let id = seed_product(&db, "Corner Sofa #1", 1000.0, 10).await;

        let record = db.sales().register(&NewSale::new(id, 3)).await.unwrap();

        assert_eq!(record.quantity, 3);
        assert_eq!(record.sale_price, 1000.0);
        assert_eq!(record.total, 3000.0);
        assert_eq!(record.product_name, "Corner Sofa #1");

        let product = db.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock_qty, 7);

        let stored = db.sales().get_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(stored.product_id, id);
        assert_eq!(stored.quantity, 3);
    }

    #[tokio::test]
    async fn test_register_applies_discount() {
        let db = test_db().await;
        let id = seed_product(&db, "Double Bed #1", 1000.0, 5).await;

        let order = NewSale {
            discount_percent: 10.0,
            ..NewSale::new(id, 1)
        };
        let record = db.sales().register(&order).await.unwrap();

        assert_eq!(record.sale_price, 900.0);
        assert_eq!(record.discount_percent, 10.0);
    }

    #[tokio::test]
    async fn test_register_unit_price_override() {
        let db = test_db().await;
        let id = seed_product(&db, "Armchair #1", 5200.0, 5).await;

        let order = NewSale {
            unit_price: Some(4000.0),
            discount_percent: 25.0,
            ..NewSale::new(id, 2)
        };
        let record = db.sales().register(&order).await.unwrap();

        // discount applies to the override, not the base price
        assert_eq!(record.sale_price, 3000.0);
        assert_eq!(record.total, 6000.0);
    }

    #[tokio::test]
    async fn test_register_insufficient_stock_leaves_stock_unchanged() {
        let db = test_db().await;
        let id = seed_product(&db, "TV Stand #1", 2500.0, 2).await;

        let err = db.sales().register(&NewSale::new(id, 5)).await.unwrap_err();
        match err {
            LedgerError::Domain(CoreError::InsufficientStock {
                available,
                requested,
                ..
            }) => {
                assert_eq!(available, 2);
                assert_eq!(requested, 5);
            }
            other => panic!("expected InsufficientStock, got {other}"),
        }

        let product = db.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock_qty, 2);
        assert!(db.sales().list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_unknown_product() {
        let db = test_db().await;

        let err = db.sales().register(&NewSale::new(42, 1)).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Domain(CoreError::ProductNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_non_positive_quantity() {
        let db = test_db().await;
        let id = seed_product(&db, "Nightstand #1", 900.0, 5).await;

        assert!(db.sales().register(&NewSale::new(id, 0)).await.is_err());
        assert!(db.sales().register(&NewSale::new(id, -2)).await.is_err());

        let product = db.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock_qty, 5);
    }

    #[tokio::test]
    async fn test_register_discount_over_hundred_rejected_by_store() {
        let db = test_db().await;
        let id = seed_product(&db, "Bookshelf #1", 1000.0, 5).await;

        // computed sale_price is negative; the schema CHECK rejects the row
        // and the whole transaction rolls back
        let order = NewSale {
            discount_percent: 150.0,
            ..NewSale::new(id, 1)
        };
        let err = db.sales().register(&order).await.unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Store(DbError::ConstraintViolation { .. })
        ));

        let product = db.products().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.stock_qty, 5);
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first_and_limits() {
        let db = test_db().await;
        let id = seed_product(&db, "Kitchen Chair #1", 900.0, 20).await;

        for _ in 0..4 {
            db.sales().register(&NewSale::new(id, 1)).await.unwrap();
        }

        let all = db.sales().list(None).await.unwrap();
        assert_eq!(all.len(), 4);
        // same date: ties broken by insertion order, newest first
        assert!(all.windows(2).all(|w| w[0].id > w[1].id));

        let capped = db.sales().list(Some(2)).await.unwrap();
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].id, all[0].id);
    }

    #[tokio::test]
    async fn test_list_filtered_by_name_and_customer() {
        let db = test_db().await;
        let sofa = seed_product(&db, "Corner Sofa #1", 6000.0, 10).await;
        let desk = seed_product(&db, "Writing Desk #1", 2500.0, 10).await;

        let order = NewSale {
            customer_name: Some("Hanna Kovalenko".to_string()),
            ..NewSale::new(sofa, 1)
        };
        db.sales().register(&order).await.unwrap();
        db.sales().register(&NewSale::new(desk, 1)).await.unwrap();

        let filter = SaleFilter {
            product_contains: Some("Sofa".to_string()),
            ..SaleFilter::default()
        };
        let matched = db.sales().list_filtered(&filter).await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].product_name, "Corner Sofa #1");

        let filter = SaleFilter {
            customer_contains: Some("Kovalenko".to_string()),
            ..SaleFilter::default()
        };
        let matched = db.sales().list_filtered(&filter).await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].customer_name.as_deref(), Some("Hanna Kovalenko"));
    }

    #[tokio::test]
    async fn test_list_filtered_date_bounds_inclusive() {
        let db = test_db().await;
        let id = seed_product(&db, "Dresser #1", 3200.0, 10).await;
        db.sales().register(&NewSale::new(id, 1)).await.unwrap();

        let today = Local::now().date_naive();

        let filter = SaleFilter {
            date_from: Some(today),
            date_to: Some(today),
            ..SaleFilter::default()
        };
        assert_eq!(db.sales().list_filtered(&filter).await.unwrap().len(), 1);

        let filter = SaleFilter {
            date_from: Some(today.succ_opt().unwrap()),
            ..SaleFilter::default()
        };
        assert!(db.sales().list_filtered(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_total_by_day_sums_per_date() {
        let db = test_db().await;
        let a = seed_product(&db, "Kitchen Chair #1", 100.0, 10).await;
        let b = seed_product(&db, "Wall Shelf #1", 50.0, 10).await;

        // qty 2 x 100 + qty 1 x 50, same day
        db.sales().register(&NewSale::new(a, 2)).await.unwrap();
        db.sales().register(&NewSale::new(b, 1)).await.unwrap();

        let report = db.sales().report_total_by_day().await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].sale_date, Local::now().date_naive());
        assert_eq!(report[0].total, 250.0);
    }
}
