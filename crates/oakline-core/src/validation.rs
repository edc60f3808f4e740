//! # Validation Module
//!
//! Input validation for the catalog and sales forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                        │
//! │                                                              │
//! │  Layer 1: Form UI (external)                                 │
//! │  ├── Field presence, immediate feedback                      │
//! │  └── Raw text parsing via parse_decimal / parse_integer      │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 2: THIS MODULE                                        │
//! │  └── Business rule validation before any row is written      │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 3: SQLite                                             │
//! │  └── NOT NULL / CHECK / foreign key constraints              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest name or category the catalog accepts.
const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name: required, at most 200 characters.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name)
}

/// Validates a product category: required, at most 200 characters.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required_text("category", category)
}

fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates a base price: zero is allowed, negative is not.
pub fn validate_base_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(ValidationError::MustBeNonNegative {
            field: "base_price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock quantity: zero or more units.
pub fn validate_stock_qty(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock_qty".to_string(),
        });
    }

    Ok(())
}

/// Validates a sale quantity: strictly positive.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an optional dimension (width/height/depth in cm): when present
/// it must be strictly positive.
pub fn validate_dimension(field: &str, value: Option<f64>) -> ValidationResult<()> {
    if let Some(v) = value {
        if v <= 0.0 || !v.is_finite() {
            return Err(ValidationError::MustBePositive {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a catalog draft before insert or full-replace update.
pub fn validate_new_product(draft: &NewProduct) -> ValidationResult<()> {
    validate_name(&draft.name)?;
    validate_category(&draft.category)?;
    validate_base_price(draft.base_price)?;
    validate_stock_qty(draft.stock_qty)?;
    validate_dimension("width", draft.width)?;
    validate_dimension("height", draft.height)?;
    validate_dimension("depth", draft.depth)?;

    Ok(())
}

// =============================================================================
// Form Input Parsing
// =============================================================================

/// Parses a decimal form field, accepting both `.` and `,` as the decimal
/// separator (the catalog form is used with either keyboard layout).
pub fn parse_decimal(field: &str, raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses an optional decimal form field; blank means absent.
pub fn parse_optional_decimal(field: &str, raw: &str) -> ValidationResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    parse_decimal(field, raw).map(Some)
}

/// Parses an integer form field (quantities, stock counts).
pub fn parse_integer(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    raw.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Dining Table #3").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(0.0).is_ok());
        assert!(validate_base_price(4500.0).is_ok());
        assert!(validate_base_price(-1.0).is_err());
        assert!(validate_base_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(20).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("width", None).is_ok());
        assert!(validate_dimension("width", Some(80.0)).is_ok());
        assert!(validate_dimension("width", Some(0.0)).is_err());
        assert!(validate_dimension("width", Some(-5.0)).is_err());
    }

    #[test]
    fn test_validate_new_product() {
        let mut draft = NewProduct::new("Armchair #1", "Armchair", 5200.0);
        assert!(validate_new_product(&draft).is_ok());

        draft.category.clear();
        assert!(validate_new_product(&draft).is_err());

        draft.category = "Armchair".to_string();
        draft.stock_qty = -1;
        assert!(validate_new_product(&draft).is_err());
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("base_price", "4500.50").unwrap(), 4500.5);
        assert_eq!(parse_decimal("base_price", "4500,50").unwrap(), 4500.5);
        assert!(parse_decimal("base_price", "abc").is_err());
    }

    #[test]
    fn test_parse_optional_decimal() {
        assert_eq!(parse_optional_decimal("width", "").unwrap(), None);
        assert_eq!(parse_optional_decimal("width", "  ").unwrap(), None);
        assert_eq!(parse_optional_decimal("width", "80").unwrap(), Some(80.0));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("quantity", "7").unwrap(), 7);
        assert!(parse_integer("quantity", "7.5").is_err());
        assert!(parse_integer("quantity", "x").is_err());
    }
}
