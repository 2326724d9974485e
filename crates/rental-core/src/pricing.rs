//! # Pricing Module
//!
//! Computes the basic (pre-tax) payment for a rental.
//!
//! ## Billing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hours = whole minutes between pickup and return / 60  (f64)           │
//! │                                                                         │
//! │  hours <= 12  ──►  price_per_hour × ceil(hours)                         │
//! │  hours >  12  ──►  price_per_day  × ceil(hours / 24)                    │
//! │                                                                         │
//! │  10h00   → 10 hours                                                     │
//! │  10h30   → 11 hours                                                     │
//! │  12h00   → 12 hours   (boundary stays hourly)                           │
//! │  12h01   →  1 day                                                       │
//! │  48h00   →  2 days                                                      │
//! │  48h01   →  3 days                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PricingPlan, RentalPeriod};

/// Rentals up to and including this many hours are billed by the hour.
pub const HOURLY_THRESHOLD_HOURS: f64 = 12.0;

pub const HOURS_PER_DAY: f64 = 24.0;

/// How a rental duration is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingBasis {
    /// Number of started hours.
    Hourly(i64),
    /// Number of started days.
    Daily(i64),
}

impl BillingBasis {
    /// Picks the billing basis for a positive duration.
    pub fn for_hours(duration_hours: f64) -> Self {
        if duration_hours <= HOURLY_THRESHOLD_HOURS {
            BillingBasis::Hourly(duration_hours.ceil() as i64)
        } else {
            BillingBasis::Daily((duration_hours / HOURS_PER_DAY).ceil() as i64)
        }
    }

    /// Charge for this basis under the given plan.
    pub fn charge(&self, plan: &PricingPlan) -> CoreResult<Money> {
        let charge = match *self {
            BillingBasis::Hourly(hours) => plan.price_per_hour().checked_multiply_quantity(hours),
            BillingBasis::Daily(days) => plan.price_per_day().checked_multiply_quantity(days),
        };
        charge.ok_or_else(|| CoreError::AmountOverflow {
            what: "basic payment".to_string(),
        })
    }
}

/// Rental length in hours, from whole elapsed minutes.
///
/// Seconds are dropped before dividing, so 10:00:00 → 10:30:59 is 0.5 hours.
pub fn duration_hours(period: &RentalPeriod) -> f64 {
    period.duration().num_minutes() as f64 / 60.0
}

/// Computes the basic payment for a rental of `duration_hours`.
///
/// ## Example
/// ```rust
/// use rental_core::money::Money;
/// use rental_core::pricing::compute_basic_payment;
/// use rental_core::PricingPlan;
///
/// let plan = PricingPlan::new(Money::from_cents(1000), Money::from_cents(5000)).unwrap();
///
/// assert_eq!(compute_basic_payment(10.0, &plan).unwrap().cents(), 10000);
/// assert_eq!(compute_basic_payment(48.0, &plan).unwrap().cents(), 10000);
/// assert!(compute_basic_payment(0.0, &plan).is_err());
/// ```
pub fn compute_basic_payment(duration_hours: f64, plan: &PricingPlan) -> CoreResult<Money> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(CoreError::InvalidPeriod {
            reason: format!("duration of {duration_hours} hours is not positive"),
        });
    }

    let basis = BillingBasis::for_hours(duration_hours);
    let basic_payment = basis.charge(plan)?;
    debug!(duration_hours, ?basis, basic_payment = %basic_payment, "Computed basic payment");

    Ok(basic_payment)
}

// =============================================================================
// Unit Tests
// =============================================================================
