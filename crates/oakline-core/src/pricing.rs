//! # Pricing Module
//!
//! Discount arithmetic for sale registration.
//!
//! The charged unit price is derived from the base (or overridden) unit
//! price and a percentage discount:
//!
//! ```text
//! charged = base * (1 - discount / 100)
//! ```
//!
//! The discount is recorded exactly as entered and deliberately NOT clamped
//! to `[0, 100]`: a negative discount raises the price, and a discount over
//! 100 produces a negative result that the store's `sale_price >= 0` check
//! rejects. Changing either behavior needs product guidance first.
//!
//! ## Usage
//! ```rust
//! use oakline_core::pricing::{charged_unit_price, line_total};
//!
//! let unit = charged_unit_price(1000.0, 10.0);
//! assert_eq!(unit, 900.0);
//! assert_eq!(line_total(2, unit), 1800.0);
//! ```

// =============================================================================
// Price Calculation
// =============================================================================

/// Applies a percentage discount to a unit price.
///
/// ## Arguments
/// * `base_unit_price` - The product's base price, or the operator's
///   override from the sales form
/// * `discount_percent` - Percentage off; 0 leaves the price unchanged
#[inline]
pub fn charged_unit_price(base_unit_price: f64, discount_percent: f64) -> f64 {
    base_unit_price * (1.0 - discount_percent / 100.0)
}

/// Line total for a sale: `quantity * unit_price`.
#[inline]
pub fn line_total(quantity: i64, unit_price: f64) -> f64 {
    quantity as f64 * unit_price
}

/// Formats a monetary amount for display, exports and the audit log.
///
/// Two decimal places, matching the report tables.
#[inline]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charged_unit_price_basic_discount() {
        // base 1000 at 10% off charges 900.00
        assert_eq!(charged_unit_price(1000.0, 10.0), 900.0);
    }

    #[test]
    fn test_charged_unit_price_zero_discount() {
        assert_eq!(charged_unit_price(4500.0, 0.0), 4500.0);
    }

    #[test]
    fn test_charged_unit_price_full_discount() {
        assert_eq!(charged_unit_price(4500.0, 100.0), 0.0);
    }

    #[test]
    fn test_negative_discount_raises_price() {
        // Accepted as-is; the form does not clamp the discount field.
        assert_eq!(charged_unit_price(1000.0, -10.0), 1100.0);
    }

    #[test]
    fn test_discount_over_hundred_goes_negative() {
        // The store rejects the resulting row; the math itself is untouched.
        assert!(charged_unit_price(1000.0, 150.0) < 0.0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2, 100.0), 200.0);
        assert_eq!(line_total(3, 333.5), 1000.5);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(900.0), "900.00");
        assert_eq!(format_amount(249.999), "250.00");
        assert_eq!(format_amount(0.5), "0.50");
    }
}
