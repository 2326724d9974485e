//! # Tax Strategies
//!
//! The tax owed on a basic payment is computed by an injected [`TaxStrategy`].
//! The invoicer only sees the trait, so a different region's rule is a new
//! implementation, never an edit to the invoicer.
//!
//! ```text
//! ┌──────────────────┐        ┌──────────────────────────────────────────┐
//! │  RentalInvoicer  │───────►│  dyn TaxStrategy                         │
//! └──────────────────┘        │  ├── FlatRateTax    amount × rate        │
//!                             │  ├── ThresholdTax   rate by amount tier  │
//!                             │  └── TaxExempt      always zero          │
//!                             └──────────────────────────────────────────┘
//! ```
//!
//! Rates above 100% are rejected when a strategy is built, so the tax on an
//! amount never exceeds the amount itself.

use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::TaxRate;
use crate::validation;

/// Computes the tax owed on an amount.
pub trait TaxStrategy: fmt::Debug {
    /// Tax owed on `amount`. Negative amounts owe nothing.
    fn compute_tax(&self, amount: Money) -> Money;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;
}

// =============================================================================
// Flat Rate
// =============================================================================

/// The same percentage on every amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatRateTax {
    rate: TaxRate,
}

impl FlatRateTax {
    /// Creates a flat tax, rejecting rates above 100%.
    ///
    /// ```rust
    /// use rental_core::tax::FlatRateTax;
    /// use rental_core::TaxRate;
    ///
    /// assert!(FlatRateTax::new(TaxRate::from_bps(825)).is_ok());
    /// assert!(FlatRateTax::new(TaxRate::from_bps(20_000)).is_err());
    /// ```
    pub fn new(rate: TaxRate) -> CoreResult<Self> {
        validation::validate_tax_rate_bps(rate.bps())?;
        Ok(FlatRateTax { rate })
    }
}

impl TaxStrategy for FlatRateTax {
    fn compute_tax(&self, amount: Money) -> Money {
        if amount.is_negative() {
            return Money::zero();
        }
        amount.calculate_tax(self.rate)
    }

    fn name(&self) -> &str {
        "flat"
    }
}

// =============================================================================
// Threshold
// =============================================================================

/// One rate up to and including a threshold amount, another above it.
///
/// The rate applies to the whole amount, not just the part above the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTax {
    name: String,
    threshold: Money,
    rate_at_or_below: TaxRate,
    rate_above: TaxRate,
}

impl ThresholdTax {
    /// Creates a threshold tax, rejecting rates above 100%.
    pub fn new(
        name: impl Into<String>,
        threshold: Money,
        rate_at_or_below: TaxRate,
        rate_above: TaxRate,
    ) -> CoreResult<Self> {
        validation::validate_tax_rate_bps(rate_at_or_below.bps())?;
        validation::validate_tax_rate_bps(rate_above.bps())?;

        Ok(ThresholdTax {
            name: name.into(),
            threshold,
            rate_at_or_below,
            rate_above,
        })
    }

    /// Brazilian rental tax: 20% up to 100.00, 15% above.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    /// use rental_core::tax::{TaxStrategy, ThresholdTax};
    ///
    /// let tax = ThresholdTax::brazil();
    /// assert_eq!(tax.compute_tax(Money::from_cents(5000)).cents(), 1000);
    /// assert_eq!(tax.compute_tax(Money::from_cents(25000)).cents(), 3750);
    /// ```
    pub fn brazil() -> Self {
        ThresholdTax {
            name: "brazil".to_string(),
            threshold: Money::from_cents(10_000),
            rate_at_or_below: TaxRate::from_bps(2000),
            rate_above: TaxRate::from_bps(1500),
        }
    }

    /// The rate that applies to `amount`.
    pub fn rate_for(&self, amount: Money) -> TaxRate {
        if amount <= self.threshold {
            self.rate_at_or_below
        } else {
            self.rate_above
        }
    }
}

impl TaxStrategy for ThresholdTax {
    fn compute_tax(&self, amount: Money) -> Money {
        if amount.is_negative() {
            return Money::zero();
        }
        amount.calculate_tax(self.rate_for(amount))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Exempt
// =============================================================================

/// No tax at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxExempt;

impl TaxStrategy for TaxExempt {
    fn compute_tax(&self, _amount: Money) -> Money {
        Money::zero()
    }

    fn name(&self) -> &str {
        "exempt"
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_flat_rate_applies_percentage() {
        let tax = FlatRateTax::new(TaxRate::from_bps(1000)).unwrap();
        assert_eq!(tax.compute_tax(Money::from_cents(10000)).cents(), 1000);
        assert_eq!(tax.compute_tax(Money::from_cents(1234)).cents(), 123);
        assert_eq!(tax.compute_tax(Money::zero()).cents(), 0);
        assert_eq!(tax.name(), "flat");
    }

    #[test]
    fn test_flat_rate_above_full_rate_is_rejected() {
        assert!(FlatRateTax::new(TaxRate::from_bps(10000)).is_ok());
        assert!(matches!(
            FlatRateTax::new(TaxRate::from_bps(10001)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_brazil_threshold_is_inclusive() {
        let tax = ThresholdTax::brazil();
        assert_eq!(tax.compute_tax(Money::from_cents(10000)).cents(), 2000);
        // $100.01 × 15% = $15.0015
        assert_eq!(tax.compute_tax(Money::from_cents(10001)).cents(), 1500);
        assert_eq!(tax.compute_tax(Money::from_cents(25000)).cents(), 3750);
        assert_eq!(tax.name(), "brazil");
    }

    #[test]
    fn test_threshold_rate_selection() {
        let tax = ThresholdTax::new(
            "tiered",
            Money::from_cents(500),
            TaxRate::from_bps(500),
            TaxRate::from_bps(0),
        )
        .unwrap();
        assert_eq!(tax.rate_for(Money::from_cents(500)).bps(), 500);
        assert_eq!(tax.rate_for(Money::from_cents(501)).bps(), 0);
        assert_eq!(tax.name(), "tiered");
    }

    #[test]
    fn test_threshold_rate_above_full_rate_is_rejected() {
        let threshold = Money::from_cents(500);
        assert!(ThresholdTax::new("t", threshold, TaxRate::from_bps(10001), TaxRate::from_bps(0)).is_err());
        assert!(ThresholdTax::new("t", threshold, TaxRate::from_bps(0), TaxRate::from_bps(10001)).is_err());
    }

    #[test]
    fn test_negative_amounts_owe_nothing() {
        let strategies: Vec<Box<dyn TaxStrategy>> = vec![
            Box::new(FlatRateTax::new(TaxRate::from_bps(2000)).unwrap()),
            Box::new(ThresholdTax::brazil()),
            Box::new(TaxExempt),
        ];
        for strategy in &strategies {
            assert_eq!(strategy.compute_tax(Money::from_cents(-10000)), Money::zero());
        }
    }

    #[test]
    fn test_exempt_is_always_zero() {
        assert_eq!(TaxExempt.compute_tax(Money::from_cents(999_999)), Money::zero());
    }
}
