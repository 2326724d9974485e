//! # Rental Invoicer
//!
//! Turns a rental period into an invoice.
//!
//! ## Flow
//! ```text
//! RentalPeriod ──► duration_hours ──► compute_basic_payment(plan) ──► basic
//!                                                                      │
//!                                         tax.compute_tax(basic) ◄─────┤
//!                                                  │                   │
//!                                                  ▼                   ▼
//!                                   Invoice { basic, tax, total = basic + tax }
//! ```

use tracing::debug;

use crate::error::CoreResult;
use crate::pricing;
use crate::tax::TaxStrategy;
use crate::types::{Invoice, InvoicedRental, PricingPlan, RentalPeriod};

/// Issues the invoice for one rental.
///
/// Pure: the same inputs always produce the same invoice.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rental_core::money::Money;
/// use rental_core::tax::ThresholdTax;
/// use rental_core::{issue_invoice, PricingPlan, RentalPeriod};
///
/// let day = NaiveDate::from_ymd_opt(2018, 6, 25).unwrap();
/// let period = RentalPeriod::new(
///     day.and_hms_opt(10, 30, 0).unwrap(),
///     day.and_hms_opt(14, 40, 0).unwrap(),
///     "Civic",
/// )
/// .unwrap();
/// let plan = PricingPlan::new(Money::from_cents(1000), Money::from_cents(13000)).unwrap();
///
/// let invoice = issue_invoice(&period, &plan, &ThresholdTax::brazil()).unwrap();
/// assert_eq!(invoice.basic_payment().cents(), 5000);
/// assert_eq!(invoice.tax().cents(), 1000);
/// assert_eq!(invoice.total_payment().cents(), 6000);
/// ```
pub fn issue_invoice(
    period: &RentalPeriod,
    plan: &PricingPlan,
    tax: &dyn TaxStrategy,
) -> CoreResult<Invoice> {
    let hours = pricing::duration_hours(period);
    let basic_payment = pricing::compute_basic_payment(hours, plan)?;
    let tax_amount = tax.compute_tax(basic_payment);
    let invoice = Invoice::new(basic_payment, tax_amount)?;

    debug!(
        vehicle = period.vehicle_label(),
        strategy = tax.name(),
        basic_payment = %invoice.basic_payment(),
        tax = %invoice.tax(),
        total_payment = %invoice.total_payment(),
        "Issued invoice"
    );

    Ok(invoice)
}

/// A pricing plan bound to the tax strategy in force.
#[derive(Debug)]
pub struct RentalInvoicer {
    plan: PricingPlan,
    tax: Box<dyn TaxStrategy>,
}

impl RentalInvoicer {
    pub fn new(plan: PricingPlan, tax: Box<dyn TaxStrategy>) -> Self {
        RentalInvoicer { plan, tax }
    }

    pub fn plan(&self) -> &PricingPlan {
        &self.plan
    }

    pub fn tax_strategy(&self) -> &dyn TaxStrategy {
        self.tax.as_ref()
    }

    /// Issues the invoice for `period` under this plan and strategy.
    pub fn issue(&self, period: &RentalPeriod) -> CoreResult<Invoice> {
        issue_invoice(period, &self.plan, self.tax.as_ref())
    }

    /// Issues the invoice and attaches it to the rental it belongs to.
    pub fn invoice_rental(&self, period: RentalPeriod) -> CoreResult<InvoicedRental> {
        let invoice = self.issue(&period)?;
        Ok(InvoicedRental { period, invoice })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
