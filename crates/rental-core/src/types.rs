//! # Domain Types
//!
//! Core domain types used throughout the rental invoicer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  RentalPeriod   │   │  PricingPlan    │   │    Invoice      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  start_time     │   │  price_per_hour │   │  basic_payment  │       │
//! │  │  end_time       │   │  price_per_day  │   │  tax            │       │
//! │  │  vehicle_label  │   └─────────────────┘   │  total_payment  │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────────────┐             │
//! │  │    TaxRate      │   │  InvoicedRental                 │             │
//! │  │  bps (u32)      │   │  RentalPeriod + its Invoice     │             │
//! │  │  2000 = 20%     │   └─────────────────────────────────┘             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records are immutable once built: fields are private and the
//! constructors enforce the invariants.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20%, 1500 bps = 15%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from basis points, rejecting rates above 100%.
    pub fn try_from_bps(bps: u32) -> CoreResult<Self> {
        validation::validate_tax_rate_bps(bps)?;
        Ok(TaxRate(bps))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Rental Period
// =============================================================================

/// A vehicle's pickup and return times.
///
/// The return time is always strictly after the pickup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalPeriod {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    vehicle_label: String,
}

impl RentalPeriod {
    /// Creates a rental period, rejecting empty or backwards periods.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use rental_core::RentalPeriod;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let pickup = day.and_hms_opt(10, 0, 0).unwrap();
    /// let dropoff = day.and_hms_opt(20, 0, 0).unwrap();
    ///
    /// assert!(RentalPeriod::new(pickup, dropoff, "Civic").is_ok());
    /// assert!(RentalPeriod::new(dropoff, pickup, "Civic").is_err());
    /// ```
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        vehicle_label: impl Into<String>,
    ) -> CoreResult<Self> {
        validation::validate_period(start_time, end_time)?;

        Ok(RentalPeriod {
            start_time,
            end_time,
            vehicle_label: vehicle_label.into(),
        })
    }

    #[inline]
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    #[inline]
    pub fn vehicle_label(&self) -> &str {
        &self.vehicle_label
    }

    /// Elapsed time between pickup and return.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

// =============================================================================
// Pricing Plan
// =============================================================================

/// Hourly and daily rates for a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    price_per_hour: Money,
    price_per_day: Money,
}

impl PricingPlan {
    /// Creates a pricing plan. Zero rates are allowed, negative ones are not.
    pub fn new(price_per_hour: Money, price_per_day: Money) -> CoreResult<Self> {
        validation::validate_price("price_per_hour", price_per_hour)?;
        validation::validate_price("price_per_day", price_per_day)?;

        Ok(PricingPlan {
            price_per_hour,
            price_per_day,
        })
    }

    #[inline]
    pub fn price_per_hour(&self) -> Money {
        self.price_per_hour
    }

    #[inline]
    pub fn price_per_day(&self) -> Money {
        self.price_per_day
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// The charge for a rental. `total_payment` is always `basic_payment + tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Invoice {
    basic_payment: Money,
    tax: Money,
    total_payment: Money,
}

impl Invoice {
    /// Builds an invoice, failing if the total does not fit in `Money`.
    pub fn new(basic_payment: Money, tax: Money) -> CoreResult<Self> {
        let total_payment = basic_payment
            .checked_add(tax)
            .ok_or_else(|| CoreError::AmountOverflow {
                what: "total payment".to_string(),
            })?;

        Ok(Invoice {
            basic_payment,
            tax,
            total_payment,
        })
    }

    #[inline]
    pub fn basic_payment(&self) -> Money {
        self.basic_payment
    }

    #[inline]
    pub fn tax(&self) -> Money {
        self.tax
    }

    #[inline]
    pub fn total_payment(&self) -> Money {
        self.total_payment
    }
}

// =============================================================================
// Invoiced Rental
// =============================================================================

/// A rental together with the invoice issued for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoicedRental {
    pub period: RentalPeriod,
    pub invoice: Invoice,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(825);
        assert_eq!(rate.bps(), 825);
    }

    #[test]
    fn test_tax_rate_try_from_bps() {
        assert!(TaxRate::try_from_bps(10000).is_ok());
        assert!(matches!(
            TaxRate::try_from_bps(10001),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_rental_period_accessors() {
        let period = RentalPeriod::new(at(1, 10, 0), at(1, 20, 30), "Civic").unwrap();
        assert_eq!(period.vehicle_label(), "Civic");
        assert_eq!(period.start_time(), at(1, 10, 0));
        assert_eq!(period.end_time(), at(1, 20, 30));
        assert_eq!(period.duration().num_minutes(), 630);
    }

    #[test]
    fn test_rental_period_rejects_empty_and_backwards() {
        assert!(matches!(
            RentalPeriod::new(at(1, 10, 0), at(1, 10, 0), "Civic"),
            Err(CoreError::InvalidPeriod { .. })
        ));
        assert!(matches!(
            RentalPeriod::new(at(2, 10, 0), at(1, 10, 0), "Civic"),
            Err(CoreError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_pricing_plan_rejects_negative_rates() {
        assert!(PricingPlan::new(Money::zero(), Money::zero()).is_ok());

        let err = PricingPlan::new(Money::from_cents(-1), Money::from_cents(5000)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { ref field, cents: -1 } if field == "price_per_hour"));

        let err = PricingPlan::new(Money::from_cents(1000), Money::from_cents(-5000)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice { ref field, .. } if field == "price_per_day"));
    }

    #[test]
    fn test_invoice_total_is_sum() {
        let invoice = Invoice::new(Money::from_cents(5000), Money::from_cents(1000)).unwrap();
        assert_eq!(invoice.basic_payment().cents(), 5000);
        assert_eq!(invoice.tax().cents(), 1000);
        assert_eq!(invoice.total_payment().cents(), 6000);
    }

    #[test]
    fn test_invoice_total_overflow_is_rejected() {
        let basic = Money::from_cents(i64::MAX - 10);
        assert!(matches!(
            Invoice::new(basic, Money::from_cents(11)),
            Err(CoreError::AmountOverflow { ref what }) if what == "total payment"
        ));
        assert!(Invoice::new(basic, Money::from_cents(10)).is_ok());
    }

    #[test]
    fn test_invoiced_rental_serializes() {
        let period = RentalPeriod::new(at(1, 10, 0), at(1, 20, 0), "Civic").unwrap();
        let invoice = Invoice::new(Money::from_cents(10000), Money::from_cents(2000)).unwrap();
        let json = serde_json::to_value(InvoicedRental { period, invoice }).unwrap();

        assert_eq!(json["period"]["vehicle_label"], "Civic");
        assert_eq!(json["invoice"]["total_payment"], 12000);
    }
}
