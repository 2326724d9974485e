//! # Rental Invoice CLI
//!
//! Console front-end for rental-core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         rental-invoice                                  │
//! │                                                                         │
//! │  env ──► CliConfig ──► TaxStrategy ─┐                                  │
//! │                                     ▼                                   │
//! │  stdin ──► RentalForm ──► RentalInvoicer ──► report ──► stdout         │
//! │                                                                         │
//! │  logs ──► stderr (RUST_LOG)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod input;
mod report;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use rental_core::{PricingPlan, RentalInvoicer, RentalPeriod};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = CliConfig::load().context("Failed to load configuration")?;
    info!(
        tax_strategy = ?config.tax_strategy,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&config, &mut stdin.lock(), &mut stdout.lock()).context("Failed to issue invoice")?;

    Ok(())
}

/// Reads one rental, issues its invoice and writes the report.
fn run<R, W>(config: &CliConfig, input: &mut R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let form = input::read_rental_form(input, output)?;

    let period = RentalPeriod::new(form.pickup, form.dropoff, form.vehicle_label)?;
    let plan = PricingPlan::new(form.price_per_hour, form.price_per_day)?;
    let invoicer = RentalInvoicer::new(plan, config.build_tax_strategy()?);

    let rental = invoicer.invoice_rental(period)?;
    info!(
        vehicle = rental.period.vehicle_label(),
        tax_strategy = invoicer.tax_strategy().name(),
        price_per_day = %invoicer.plan().price_per_day(),
        total_payment = %rental.invoice.total_payment(),
        "Invoice issued"
    );

    report::write_report(output, &rental, config.output, &config.currency_symbol)?;
    output.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Lifecycle messages
/// - `RUST_LOG=rental_core=debug` - Billing basis and tax for each invoice
/// - Default: WARN level, so stdout/stderr only show the session
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
