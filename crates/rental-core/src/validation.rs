//! # Validation Module
//!
//! Input checks that guard the pricing rules.
//!
//! Only what is needed to compute a number is validated here: a period that
//! actually elapses, rates that are not negative, and a tax rate that does
//! not exceed 100%. Malformed text (dates, numbers) is rejected by the CLI
//! before it ever reaches these functions.
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//! use rental_core::validation::{validate_price, validate_tax_rate_bps};
//!
//! assert!(validate_price("price_per_hour", Money::from_cents(1000)).is_ok());
//! assert!(validate_price("price_per_hour", Money::from_cents(-1)).is_err());
//! assert!(validate_tax_rate_bps(2000).is_ok());
//! ```

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for tax rates: 10000 bps = 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Period Validators
// =============================================================================

/// Validates that a rental lasts at least one whole minute.
///
/// ## Rules
/// - Return must be strictly after pickup
/// - Billing works in whole minutes, so a sub-minute rental is empty too
///
/// ```text
/// pickup 10:00, return 20:00  → OK (600 min)
/// pickup 10:00, return 10:00  → InvalidPeriod
/// pickup 20:00, return 10:00  → InvalidPeriod
/// ```
pub fn validate_period(start: NaiveDateTime, end: NaiveDateTime) -> CoreResult<()> {
    if (end - start).num_minutes() <= 0 {
        return Err(CoreError::InvalidPeriod {
            reason: format!("return {end} must be at least a minute after pickup {start}"),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a pricing rate.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free hourly or daily rate)
pub fn validate_price(field: &str, price: Money) -> CoreResult<()> {
    if price.is_negative() {
        return Err(CoreError::InvalidPrice {
            field: field.to_string(),
            cents: price.cents(),
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_TAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_validate_period() {
        assert!(validate_period(at(10, 0, 0), at(20, 0, 0)).is_ok());
        assert!(validate_period(at(10, 0, 0), at(10, 1, 0)).is_ok());

        assert!(validate_period(at(10, 0, 0), at(10, 0, 0)).is_err());
        let err = validate_period(at(20, 0, 0), at(10, 0, 0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rental period: return 2024-01-01 10:00:00 must be at least a minute after pickup 2024-01-01 20:00:00"
        );
        // 59 seconds rounds down to zero billable minutes
        assert!(validate_period(at(10, 0, 0), at(10, 0, 59)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price_per_day", Money::zero()).is_ok());
        assert!(validate_price("price_per_day", Money::from_cents(13000)).is_ok());

        let err = validate_price("price_per_day", Money::from_cents(-100)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price for price_per_day: -100 cents is negative"
        );
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(1500).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
