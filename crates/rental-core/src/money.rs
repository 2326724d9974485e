//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 rates:                                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Rates are parsed straight from "10.50" into 1050 cents.             │
//! │    Only the rental DURATION is a float, never an amount.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let per_hour: Money = "10.50".parse().unwrap();
//! assert_eq!(per_hour.cents(), 1050);
//!
//! let four_hours = per_hour.checked_multiply_quantity(4).unwrap();
//! assert_eq!(four_hours.to_string(), "$42.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values exist only to be rejected by validation
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked arithmetic**: Overflow is reported, never wrapped
///
/// ## Where Money is Used
/// ```text
/// PricingPlan.price_per_hour ──┐
///                              ├──► basic_payment ──► TaxStrategy ──► tax
/// PricingPlan.price_per_day ───┘          │                            │
///                                         └────────► total_payment ◄───┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at the given rate, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5). With rates capped at
    /// 100% the result never exceeds the amount, so it always fits in i64.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    /// use rental_core::types::TaxRate;
    ///
    /// let basic = Money::from_cents(10001); // $100.01
    /// let rate = TaxRate::from_bps(1500);   // 15%
    ///
    /// // $100.01 × 15% = $15.0015 → $15.00
    /// assert_eq!(basic.calculate_tax(rate).cents(), 1500);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large amounts cannot overflow mid-calculation
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a whole number of billing units (hours or days).
    ///
    /// Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let per_day = Money::from_cents(5000); // $50.00
    /// assert_eq!(per_day.checked_multiply_quantity(2).unwrap().cents(), 10000);
    /// assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts. Returns `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Formats the amount with two decimals behind the given currency symbol.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(12000).display_with("R$"), "R$120.00");
    /// ```
    pub fn display_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a plain decimal amount such as `"130"`, `"10.5"` or `"10.555"`.
///
/// Digits past the cent are rounded half up (away from zero), the way the
/// amount would be printed with two decimals: `"10.555"` is 1056 cents.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a decimal number"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("is too large"))?
        };

        // Only ASCII digits remain, so byte indexing is safe
        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| (b - b'0') as i64);
        let frac_value = digit(0) * 10 + digit(1);
        let round_up = digit(2) >= 5;

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_value))
            .and_then(|c| c.checked_add(round_up as i64))
            .ok_or_else(|| invalid("is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$D.CC`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with("$"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
