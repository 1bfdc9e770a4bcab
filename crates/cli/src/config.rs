//! Terminal configuration: backend, display and logging settings.

use clap::{Args, ValueEnum};
use estoque::prices::{DEFAULT_DATE_FORMAT, DisplayLocale, currency_for_code};
use jiff::tz::TimeZone;
use thiserror::Error;

/// Backend connection settings.
#[derive(Debug, Args)]
pub(crate) struct ApiConfig {
    /// Base URL of the inventory backend
    #[arg(
        long,
        env = "ESTOQUE_API_URL",
        default_value = "http://localhost:8000/api",
        global = true
    )]
    pub(crate) api_url: String,
}

/// Amount and date display settings.
#[derive(Debug, Args)]
pub(crate) struct DisplayConfig {
    /// ISO code of the currency amounts are shown in (BRL, USD, EUR, GBP)
    #[arg(long, env = "ESTOQUE_CURRENCY", default_value = "BRL", global = true)]
    pub(crate) currency: String,

    /// Decimal separator for amounts
    #[arg(
        long,
        env = "ESTOQUE_DECIMAL_SEPARATOR",
        default_value_t = '.',
        global = true
    )]
    pub(crate) decimal_separator: char,

    /// strftime pattern for dates
    #[arg(
        long,
        env = "ESTOQUE_DATE_FORMAT",
        default_value = DEFAULT_DATE_FORMAT,
        global = true
    )]
    pub(crate) date_format: String,

    /// IANA time zone dates are shown in; the system zone when omitted
    #[arg(long, env = "ESTOQUE_TIME_ZONE", global = true)]
    pub(crate) time_zone: Option<String>,
}

/// Invalid display settings.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Currency code outside the supported set.
    #[error("unsupported currency: {0}")]
    Currency(String),

    /// Unknown time zone name.
    #[error("unknown time zone {name}: {source}")]
    TimeZone {
        /// Requested zone
        name: String,

        /// Lookup failure
        #[source]
        source: jiff::Error,
    },
}

impl DisplayConfig {
    /// Resolve the settings into a display locale.
    pub(crate) fn locale(&self) -> Result<DisplayLocale, ConfigError> {
        let currency = currency_for_code(&self.currency)
            .ok_or_else(|| ConfigError::Currency(self.currency.clone()))?;

        let time_zone = match &self.time_zone {
            Some(name) => TimeZone::get(name).map_err(|source| ConfigError::TimeZone {
                name: name.clone(),
                source,
            })?,
            None => TimeZone::system(),
        };

        Ok(DisplayLocale {
            currency,
            decimal_separator: self.decimal_separator,
            date_format: self.date_format.clone(),
            time_zone,
        })
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn display(currency: &str, time_zone: Option<&str>) -> DisplayConfig {
        DisplayConfig {
            currency: currency.to_string(),
            decimal_separator: ',',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_zone: time_zone.map(str::to_string),
        }
    }

    #[test]
    fn locale_uses_configured_values() -> TestResult {
        let locale = display("usd", Some("UTC")).locale()?;

        assert_eq!(locale.currency.iso_alpha_code, "USD");
        assert_eq!(locale.decimal_separator, ',');

        Ok(())
    }

    #[test]
    fn unsupported_currencies_are_rejected() {
        let result = display("XYZ", Some("UTC")).locale();

        assert!(
            matches!(result, Err(ConfigError::Currency(ref code)) if code == "XYZ"),
            "expected currency error, got {result:?}"
        );
    }

    #[test]
    fn unknown_time_zones_are_rejected() {
        let result = display("BRL", Some("Nowhere/Special")).locale();

        assert!(
            matches!(result, Err(ConfigError::TimeZone { .. })),
            "expected time zone error"
        );
    }
}
