//! # Error Types
//!
//! Domain-specific error types for oakline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Error Types                            │
//! │                                                              │
//! │  oakline-core errors (this file)                             │
//! │  ├── CoreError        - Business rule violations             │
//! │  └── ValidationError  - Catalog form input failures          │
//! │                                                              │
//! │  oakline-db errors (separate crate)                          │
//! │  ├── DbError          - Store-level failures                 │
//! │  └── LedgerError      - Domain + store union per operation   │
//! │                                                              │
//! │  Flow: ValidationError → CoreError → LedgerError → UI dialog │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are expected, recoverable conditions: the form UI shows the
//! message and the operator resubmits corrected input. None abort the
//! process.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by ledger operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced product id does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Requested sale quantity exceeds the units on hand.
    ///
    /// Carries both quantities so the sales form can show
    /// "available N, requested M" next to the rejected entry.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Attempted deletion of a product that sales still reference.
    ///
    /// Sales keep their product reference forever, so the catalog blocks
    /// the delete instead of leaving dangling rows.
    #[error("Cannot delete product {product_id}: {sales} sale(s) reference it")]
    ReferentialConflict { product_id: i64, sales: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog form input errors.
///
/// Raised before any row is written, so a failed validation never leaves
/// partial state behind.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long for the catalog.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Non-numeric input in a numeric form field.
    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Corner Sofa #1".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Corner Sofa #1: available 3, requested 5"
        );

        let err = CoreError::ReferentialConflict {
            product_id: 7,
            sales: 2,
        };
        assert_eq!(
            err.to_string(),
            "Cannot delete product 7: 2 sale(s) reference it"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotANumber {
            field: "base_price".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "base_price is not a number: 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
