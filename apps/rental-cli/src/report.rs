//! Invoice rendering.

use std::io::Write;

use rental_core::{Invoice, InvoicedRental};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Writes the invoice in the configured format.
pub fn write_report<W: Write>(
    output: &mut W,
    rental: &InvoicedRental,
    format: OutputFormat,
    currency_symbol: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(output, &rental.invoice, currency_symbol),
        OutputFormat::Json => write_json(output, rental),
    }
}

/// ```text
/// INVOICE
/// Basic payment: $50.00
/// Tax: $10.00
/// Total payment: $60.00
/// ```
pub fn write_text<W: Write>(
    output: &mut W,
    invoice: &Invoice,
    currency_symbol: &str,
) -> Result<(), CliError> {
    writeln!(output, "INVOICE")?;
    writeln!(
        output,
        "Basic payment: {}",
        invoice.basic_payment().display_with(currency_symbol)
    )?;
    writeln!(output, "Tax: {}", invoice.tax().display_with(currency_symbol))?;
    writeln!(
        output,
        "Total payment: {}",
        invoice.total_payment().display_with(currency_symbol)
    )?;
    Ok(())
}

/// Pretty JSON of the rental and its invoice. Amounts are in cents.
pub fn write_json<W: Write>(output: &mut W, rental: &InvoicedRental) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *output, rental)?;
    writeln!(output)?;
    Ok(())
}
