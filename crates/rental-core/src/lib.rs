//! # rental-core: Pure Business Logic for Car Rental Invoices
//!
//! This crate prices a car rental and applies the tax in force. It contains
//! only pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Rental Invoice Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-cli (binary)                          │   │
//! │  │   stdin prompts ──► parse dates/prices ──► print invoice        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ issue_invoice()                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │    tax    │  │ invoicer  │  │   │
//! │  │   │  Period   │  │  hourly/  │  │  Strategy │  │  Rental   │  │   │
//! │  │   │  Plan     │  │  daily    │  │  Flat     │  │  Invoicer │  │   │
//! │  │   │  Invoice  │  │  rule     │  │  Threshold│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PARSING OF USER TEXT • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (RentalPeriod, PricingPlan, Invoice, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Hourly/daily billing rule
//! - [`tax`] - Pluggable tax strategies
//! - [`invoicer`] - Combines pricing and tax into an invoice
//! - [`error`] - Domain error types
//! - [`validation`] - Input invariants
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rental_core::money::Money;
//! use rental_core::tax::FlatRateTax;
//! use rental_core::{PricingPlan, RentalInvoicer, RentalPeriod, TaxRate};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let period = RentalPeriod::new(
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//!     day.and_hms_opt(20, 0, 0).unwrap(),
//!     "Civic",
//! )
//! .unwrap();
//!
//! let plan = PricingPlan::new(Money::from_cents(1000), Money::from_cents(5000)).unwrap();
//! let invoicer = RentalInvoicer::new(plan, Box::new(FlatRateTax::new(TaxRate::from_bps(1000)).unwrap()));
//!
//! let invoice = invoicer.issue(&period).unwrap();
//! assert_eq!(invoice.basic_payment().cents(), 10000); // 10 hours × $10.00
//! assert_eq!(invoice.tax().cents(), 1000);
//! assert_eq!(invoice.total_payment().cents(), 11000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoicer;
pub mod money;
pub mod pricing;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoicer::{issue_invoice, RentalInvoicer};
pub use money::Money;
pub use tax::TaxStrategy;
pub use types::*;
