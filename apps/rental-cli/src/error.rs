//! Error types for the rental CLI.

use rental_core::{CoreError, ValidationError};

/// Rental CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid {field} '{value}': expected dd/MM/yyyy HH:mm")]
    InvalidDate { field: String, value: String },

    #[error("Invalid {field}: {source}")]
    InvalidAmount {
        field: String,
        #[source]
        source: ValidationError,
    },

    #[error("Unexpected end of input while reading {0}")]
    MissingInput(String),

    #[error("Rental rejected: {0}")]
    Core(#[from] CoreError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
