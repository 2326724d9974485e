//! # Rental Data Input
//!
//! Interactive prompts for the rental record and its prices.
//!
//! ## Session
//! ```text
//! Enter with the Rental data:
//! Car model: Civic
//! Pickup (dd/MM/yyyy HH:mm): 25/06/2018 10:30
//! Return (dd/MM/yyyy HH:mm): 25/06/2018 14:40
//! Enter with the price per hour:
//! 10.00
//! Enter with the price per day:
//! 130.00
//! ```
//!
//! Everything here only turns text into values. Whether those values make a
//! valid rental is decided by rental-core.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;
use rental_core::Money;
use tracing::debug;

use crate::error::CliError;

/// `dd/MM/yyyy HH:mm`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Raw rental data as typed in by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalForm {
    pub vehicle_label: String,
    pub pickup: NaiveDateTime,
    pub dropoff: NaiveDateTime,
    pub price_per_hour: Money,
    pub price_per_day: Money,
}

/// Prompts for and reads one rental form.
pub fn read_rental_form<R, W>(input: &mut R, output: &mut W) -> Result<RentalForm, CliError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter with the Rental data: ")?;

    write!(output, "Car model: ")?;
    output.flush()?;
    let vehicle_label = read_field(input, "car model")?;

    write!(output, "Pickup (dd/MM/yyyy HH:mm): ")?;
    output.flush()?;
    let pickup = parse_timestamp("pickup", &read_field(input, "pickup")?)?;

    write!(output, "Return (dd/MM/yyyy HH:mm): ")?;
    output.flush()?;
    let dropoff = parse_timestamp("return", &read_field(input, "return")?)?;

    writeln!(output, "Enter with the price per hour: ")?;
    output.flush()?;
    let price_per_hour = parse_amount("price per hour", &read_field(input, "price per hour")?)?;

    writeln!(output, "Enter with the price per day: ")?;
    output.flush()?;
    let price_per_day = parse_amount("price per day", &read_field(input, "price per day")?)?;

    let form = RentalForm {
        vehicle_label,
        pickup,
        dropoff,
        price_per_hour,
        price_per_day,
    };
    debug!(?form, "Read rental form");

    Ok(form)
}

/// Parses a `dd/MM/yyyy HH:mm` timestamp.
pub fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDateTime, CliError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        CliError::InvalidDate {
            field: field.to_string(),
            value: value.trim().to_string(),
        }
    })
}

/// Parses a decimal amount such as `10.50`.
pub fn parse_amount(field: &str, value: &str) -> Result<Money, CliError> {
    value.parse().map_err(|source| CliError::InvalidAmount {
        field: field.to_string(),
        source,
    })
}

/// Reads the next line, trimmed. End of input is an error.
fn read_field<R: BufRead>(input: &mut R, field: &str) -> Result<String, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput(field.to_string()));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn test_reads_full_form() {
        let mut input = Cursor::new("Civic\n25/06/2018 10:30\n25/06/2018 14:40\n10.00\n130.00\n");
        let mut output = Vec::new();

        let form = read_rental_form(&mut input, &mut output).unwrap();
        let day = NaiveDate::from_ymd_opt(2018, 6, 25).unwrap();

        assert_eq!(form.vehicle_label, "Civic");
        assert_eq!(form.pickup, day.and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(form.dropoff, day.and_hms_opt(14, 40, 0).unwrap());
        assert_eq!(form.price_per_hour.cents(), 1000);
        assert_eq!(form.price_per_day.cents(), 13000);

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.starts_with("Enter with the Rental data: \nCar model: "));
        assert!(prompts.contains("Pickup (dd/MM/yyyy HH:mm): "));
        assert!(prompts.contains("Return (dd/MM/yyyy HH:mm): "));
        assert!(prompts.ends_with("Enter with the price per day: \n"));
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        assert!(parse_timestamp("pickup", "25/06/2018 10:30").is_ok());

        for bad in ["2018-06-25 10:30", "25/06/2018", "31/02/2018 10:00", "25/06/2018 25:00"] {
            assert!(
                matches!(parse_timestamp("pickup", bad), Err(CliError::InvalidDate { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_malformed_amount() {
        let err = parse_amount("price per hour", "ten").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price per hour: amount has invalid format: must be a decimal number"
        );
    }

    #[test]
    fn test_amount_past_the_cent_is_rounded() {
        assert_eq!(parse_amount("price per hour", "10.555").unwrap().cents(), 1056);
        assert_eq!(parse_amount("price per day", "130.004").unwrap().cents(), 13000);
    }

    #[test]
    fn test_truncated_input_is_missing_input() {
        let mut input = Cursor::new("Civic\n25/06/2018 10:30\n");
        let mut output = Vec::new();

        let err = read_rental_form(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, CliError::MissingInput(ref field) if field == "return"));
    }
}
