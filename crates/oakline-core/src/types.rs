//! # Domain Types
//!
//! Core domain types used throughout the Oakline ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                             │
//! │                                                                  │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐    │
//! │  │    Product     │   │      Sale      │   │    LogEntry    │    │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │    │
//! │  │  id (rowid)    │   │  id (rowid)    │   │  id (rowid)    │    │
//! │  │  name/category │   │  product_id FK │   │  ts            │    │
//! │  │  base_price    │   │  sale_price    │   │  action        │    │
//! │  │  stock_qty     │   │  discount %    │   │  details       │    │
//! │  └────────────────┘   └────────────────┘   └────────────────┘    │
//! │                                                                  │
//! │  NewProduct / NewSale     - write payloads (no id yet)           │
//! │  SaleRecord               - sale joined with its product         │
//! │  DailyRevenue             - GROUP BY sale_date aggregate         │
//! │  ProductFilter/SaleFilter - optional listing constraints         │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every table row crosses the store boundary as one of these structured
//! records, never as a positional tuple.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A furniture item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,

    /// Display name shown in the catalog table.
    pub name: String,

    /// Category used for grouping and filtering (Wardrobe, Desk, ...).
    pub category: String,

    /// Primary material, if recorded.
    pub material: Option<String>,

    /// Finish color, if recorded.
    pub color: Option<String>,

    /// Width in centimeters.
    pub width: Option<f64>,

    /// Height in centimeters.
    pub height: Option<f64>,

    /// Depth in centimeters.
    pub depth: Option<f64>,

    /// List price per unit; the default charged price when a sale does not
    /// override it. Never negative.
    pub base_price: f64,

    /// Units currently on hand. Never negative.
    pub stock_qty: i64,
}

impl Product {
    /// Checks whether a sale of `quantity` units can be fulfilled from stock.
    #[inline]
    pub fn has_stock(&self, quantity: i64) -> bool {
        self.stock_qty >= quantity
    }

    /// Formats width/height/depth as a `W×H×D` label for tables and
    /// exports. `None` when no dimension is recorded.
    pub fn dimensions_label(&self) -> Option<String> {
        match (self.width, self.height, self.depth) {
            (None, None, None) => None,
            (w, h, d) => {
                let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v}"));
                Some(format!("{}×{}×{}", fmt(w), fmt(h), fmt(d)))
            }
        }
    }
}

/// Payload for inserting a product or fully replacing one on update.
///
/// Identical to [`Product`] minus the id, which the store assigns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub material: Option<String>,
    pub color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub base_price: f64,
    /// Units on hand at creation; the catalog form leaves this at 0 when
    /// the field is blank.
    pub stock_qty: i64,
}

impl NewProduct {
    /// Creates a draft with the required fields; optional attributes start
    /// empty and stock starts at 0.
    pub fn new(name: impl Into<String>, category: impl Into<String>, base_price: f64) -> Self {
        NewProduct {
            name: name.into(),
            category: category.into(),
            base_price,
            ..NewProduct::default()
        }
    }
}

/// Trimmed catalog row for the replenishment alert listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LowStockProduct {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub stock_qty: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction, as stored.
///
/// The product reference is permanent: product deletion is blocked while
/// any sale row points at it, so `product_id` never dangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    /// Unique identifier, assigned by the store on insert.
    pub id: i64,

    /// The product sold.
    pub product_id: i64,

    /// Units sold. Always positive.
    pub quantity: i64,

    /// Unit price actually charged, after discount. Never negative.
    pub sale_price: f64,

    /// Discount percentage applied to the base (or overridden) unit price.
    pub discount_percent: f64,

    /// Calendar day of the sale.
    pub sale_date: NaiveDate,

    /// Buyer, when the operator recorded one.
    pub customer_name: Option<String>,
}

/// Payload for registering a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    pub product_id: i64,

    /// Units to sell. Must be positive.
    pub quantity: i64,

    /// Unit price override; when `None` the product's base price is used.
    pub unit_price: Option<f64>,

    pub customer_name: Option<String>,

    /// Percentage discount off the unit price. Not clamped: negative values
    /// raise the price, values over 100 drive it negative and the store
    /// rejects the row.
    pub discount_percent: f64,
}

impl NewSale {
    /// Creates a sale payload at the product's base price with no discount.
    pub fn new(product_id: i64, quantity: i64) -> Self {
        NewSale {
            product_id,
            quantity,
            unit_price: None,
            customer_name: None,
            discount_percent: 0.0,
        }
    }
}

/// A sale joined with its product, as listed on the sales tab.
///
/// `total` is computed by the store as `quantity * sale_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleRecord {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub product_name: String,
    pub product_category: String,
    pub quantity: i64,
    pub sale_price: f64,
    pub discount_percent: f64,
    pub total: f64,
    pub customer_name: Option<String>,
}

// =============================================================================
// Audit Log
// =============================================================================

/// One entry in the append-only audit log.
///
/// The id doubles as the chronological order; entries are never updated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LogEntry {
    pub id: i64,

    /// When the action happened, second precision.
    pub ts: NaiveDateTime,

    /// Operator who performed the action.
    pub user: Option<String>,

    /// Short tag: `add_product`, `update_product`, `delete_product`,
    /// `add_sale`, `seed_test_data`.
    pub action: String,

    /// Free-text summary of the mutation.
    pub details: Option<String>,
}

// =============================================================================
// Reporting
// =============================================================================

/// Revenue summed over one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DailyRevenue {
    pub sale_date: NaiveDate,
    pub total: f64,
}

// =============================================================================
// Filters
// =============================================================================

/// Optional constraints for the catalog listing.
///
/// Absent fields mean "no constraint"; each present field is applied
/// independently. Substring matches are case-sensitive per the store's
/// collation; price bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub name_contains: Option<String>,
    pub category_contains: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

/// Optional constraints for the sales listing.
///
/// Date bounds are inclusive and compared as ISO calendar-date strings.
/// `limit` caps the result count after ordering (most recent first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleFilter {
    pub product_contains: Option<String>,
    pub customer_contains: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_stock() {
        let product = Product {
            id: 1,
            name: "Writing Desk #1".to_string(),
            category: "Desk".to_string(),
            material: None,
            color: None,
            width: None,
            height: None,
            depth: None,
            base_price: 3200.0,
            stock_qty: 4,
        };

        assert!(product.has_stock(4));
        assert!(product.has_stock(1));
        assert!(!product.has_stock(5));
    }

    #[test]
    fn test_dimensions_label() {
        let mut product = Product {
            id: 1,
            name: "Bookshelf #2".to_string(),
            category: "Shelving".to_string(),
            material: None,
            color: None,
            width: Some(80.0),
            height: Some(200.0),
            depth: Some(35.0),
            base_price: 2500.0,
            stock_qty: 0,
        };

        assert_eq!(product.dimensions_label().as_deref(), Some("80×200×35"));

        product.height = None;
        assert_eq!(product.dimensions_label().as_deref(), Some("80×-×35"));

        product.width = None;
        product.depth = None;
        assert_eq!(product.dimensions_label(), None);
    }

    #[test]
    fn test_new_product_defaults() {
        let draft = NewProduct::new("Corner Sofa #1", "Sofa", 7800.0);
        assert_eq!(draft.stock_qty, 0);
        assert_eq!(draft.material, None);
        assert_eq!(draft.base_price, 7800.0);
    }

    #[test]
    fn test_new_sale_defaults() {
        let sale = NewSale::new(3, 2);
        assert_eq!(sale.unit_price, None);
        assert_eq!(sale.discount_percent, 0.0);
        assert_eq!(sale.customer_name, None);
    }
}
