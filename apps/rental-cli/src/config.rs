//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                 | Default  | Meaning                            |
//! |--------------------------|----------|------------------------------------|
//! | `RENTAL_TAX_STRATEGY`    | `brazil` | `brazil`, `flat` or `exempt`       |
//! | `RENTAL_TAX_RATE_BPS`    | `0`      | Rate for `flat`, in basis points   |
//! | `RENTAL_CURRENCY_SYMBOL` | `$`      | Prefix for printed amounts         |
//! | `RENTAL_OUTPUT`          | `text`   | `text` or `json`                   |

use std::env;
use std::str::FromStr;

use rental_core::tax::{FlatRateTax, TaxExempt, ThresholdTax};
use rental_core::{CoreResult, TaxRate, TaxStrategy};
use serde::{Deserialize, Serialize};

/// Which tax rule the invoice is issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxStrategyKind {
    /// 20% up to 100.00, 15% above.
    Brazil,
    /// `RENTAL_TAX_RATE_BPS` on every amount.
    Flat,
    /// No tax.
    Exempt,
}

impl Default for TaxStrategyKind {
    fn default() -> Self {
        TaxStrategyKind::Brazil
    }
}

impl FromStr for TaxStrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brazil" => Ok(TaxStrategyKind::Brazil),
            "flat" => Ok(TaxStrategyKind::Flat),
            "exempt" => Ok(TaxStrategyKind::Exempt),
            _ => Err(ConfigError::InvalidValue("RENTAL_TAX_STRATEGY".to_string())),
        }
    }
}

/// How the invoice is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("RENTAL_OUTPUT".to_string())),
        }
    }
}

/// Rental CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Tax rule applied to the basic payment
    pub tax_strategy: TaxStrategyKind,

    /// Flat tax rate in basis points (only used by `flat`)
    pub tax_rate_bps: u32,

    /// Currency symbol printed before amounts
    pub currency_symbol: String,

    /// Output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            tax_strategy: TaxStrategyKind::default(),
            tax_rate_bps: 0,
            currency_symbol: "$".to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let config = CliConfig {
            tax_strategy: match lookup("RENTAL_TAX_STRATEGY") {
                Some(value) => value.parse()?,
                None => defaults.tax_strategy,
            },

            tax_rate_bps: match lookup("RENTAL_TAX_RATE_BPS") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RENTAL_TAX_RATE_BPS".to_string()))?,
                None => defaults.tax_rate_bps,
            },

            currency_symbol: lookup("RENTAL_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),

            output: match lookup("RENTAL_OUTPUT") {
                Some(value) => value.parse()?,
                None => defaults.output,
            },
        };

        // Reject rates above 100% up front rather than at invoice time
        TaxRate::try_from_bps(config.tax_rate_bps)
            .map_err(|_| ConfigError::InvalidValue("RENTAL_TAX_RATE_BPS".to_string()))?;

        Ok(config)
    }

    /// Builds the configured tax strategy.
    pub fn build_tax_strategy(&self) -> CoreResult<Box<dyn TaxStrategy>> {
        let strategy: Box<dyn TaxStrategy> = match self.tax_strategy {
            TaxStrategyKind::Brazil => Box::new(ThresholdTax::brazil()),
            TaxStrategyKind::Flat => Box::new(FlatRateTax::new(TaxRate::from_bps(self.tax_rate_bps))?),
            TaxStrategyKind::Exempt => Box::new(TaxExempt),
        };
        Ok(strategy)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.tax_strategy, TaxStrategyKind::Brazil);
        assert_eq!(config.tax_rate_bps, 0);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.build_tax_strategy().unwrap().name(), "brazil");
    }

    #[test]
    fn test_flat_strategy_uses_configured_rate() {
        let config = load(&[
            ("RENTAL_TAX_STRATEGY", "Flat"),
            ("RENTAL_TAX_RATE_BPS", "825"),
            ("RENTAL_CURRENCY_SYMBOL", "€"),
            ("RENTAL_OUTPUT", "json"),
        ])
        .unwrap();

        assert_eq!(config.tax_strategy, TaxStrategyKind::Flat);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.output, OutputFormat::Json);

        let strategy = config.build_tax_strategy().unwrap();
        assert_eq!(strategy.name(), "flat");
        assert_eq!(
            strategy.compute_tax(rental_core::Money::from_cents(1000)).cents(),
            83
        );
    }

    #[test]
    fn test_flat_rate_built_by_hand_is_still_checked() {
        let config = CliConfig {
            tax_strategy: TaxStrategyKind::Flat,
            tax_rate_bps: 10001,
            ..CliConfig::default()
        };
        assert!(config.build_tax_strategy().is_err());
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(load(&[("RENTAL_TAX_STRATEGY", "vat")]).is_err());
        assert!(load(&[("RENTAL_OUTPUT", "xml")]).is_err());
        assert!(load(&[("RENTAL_TAX_RATE_BPS", "ten")]).is_err());
        assert!(load(&[("RENTAL_TAX_RATE_BPS", "10001")]).is_err());
    }
}
