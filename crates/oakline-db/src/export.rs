//! # CSV Report Exports
//!
//! Flat delimited-text exports triggered from the reports tab: revenue by
//! day and the full stock listing. One header row plus one row per record,
//! `;` delimited so spreadsheet tools in locales with decimal commas open
//! them cleanly.
//!
//! Column order is fixed:
//! - revenue: `date;total`
//! - stock: `id;name;category;material;color;width;height;depth;price;stock`

use std::path::Path;

use tracing::info;

use crate::error::LedgerResult;
use crate::pool::Database;
use oakline_core::pricing::format_amount;

/// Writes the revenue-by-day report to `path`.
///
/// ## Returns
/// The number of data rows written (header excluded).
pub async fn export_revenue_csv(db: &Database, path: impl AsRef<Path>) -> LedgerResult<usize> {
    let rows = db.sales().report_total_by_day().await?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path.as_ref())?;

    writer.write_record(["date", "total"])?;
    for row in &rows {
        writer.write_record([row.sale_date.to_string(), format_amount(row.total)])?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(rows = rows.len(), path = %path.as_ref().display(), "Revenue export written");
    Ok(rows.len())
}

/// Writes the full stock listing to `path`.
///
/// Absent optional fields become empty cells; prices use two decimals.
///
/// ## Returns
/// The number of data rows written (header excluded).
pub async fn export_stock_csv(db: &Database, path: impl AsRef<Path>) -> LedgerResult<usize> {
    let products = db.products().list().await?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(path.as_ref())?;

    writer.write_record([
        "id", "name", "category", "material", "color", "width", "height", "depth", "price",
        "stock",
    ])?;
    for product in &products {
        writer.write_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.clone(),
            product.material.clone().unwrap_or_default(),
            product.color.clone().unwrap_or_default(),
            dimension_cell(product.width),
            dimension_cell(product.height),
            dimension_cell(product.depth),
            format_amount(product.base_price),
            product.stock_qty.to_string(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(rows = products.len(), path = %path.as_ref().display(), "Stock export written");
    Ok(products.len())
}

fn dimension_cell(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v}"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use oakline_core::{NewProduct, NewSale};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_export_revenue_csv() {
        let db = test_db().await;
        let mut draft = NewProduct::new("Kitchen Chair #1", "Chair", 100.0);
        draft.stock_qty = 10;
        let id = db.products().insert(&draft).await.unwrap().id;
        db.sales().register(&NewSale::new(id, 2)).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.csv");

        let written = export_revenue_csv(&db, &path).await.unwrap();
        assert_eq!(written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("date;total"));
        let row = lines.next().unwrap();
        assert!(row.ends_with(";200.00"), "unexpected row: {row}");
    }

    #[tokio::test]
    async fn test_export_stock_csv() {
        let db = test_db().await;
        let draft = NewProduct {
            name: "Sliding Wardrobe #1".to_string(),
            category: "Wardrobe".to_string(),
            material: Some("Chipboard".to_string()),
            color: None,
            width: Some(180.0),
            height: Some(200.0),
            depth: None,
            base_price: 6300.0,
            stock_qty: 4,
        };
        db.products().insert(&draft).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock.csv");

        let written = export_stock_csv(&db, &path).await.unwrap();
        assert_eq!(written, 1);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("id;name;category;material;color;width;height;depth;price;stock")
        );
        assert_eq!(
            lines.next(),
            Some("1;Sliding Wardrobe #1;Wardrobe;Chipboard;;180;200;;6300.00;4")
        );
    }

    #[tokio::test]
    async fn test_export_empty_ledger() {
        let db = test_db().await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revenue.csv");

        let written = export_revenue_csv(&db, &path).await.unwrap();
        assert_eq!(written, 0);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "date;total");
    }
}
