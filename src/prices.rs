//! Prices and dates as shown to the user.

use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::{self, Currency};

/// Default strftime pattern for short dates (`05/03/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// How amounts and dates are rendered.
#[derive(Debug, Clone)]
pub struct DisplayLocale {
    /// Currency of every amount handled by the backend.
    pub currency: &'static Currency,

    /// Decimal separator used for amounts.
    pub decimal_separator: char,

    /// strftime pattern for dates.
    pub date_format: String,

    /// Time zone dates are shown in.
    pub time_zone: TimeZone,
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            currency: iso::BRL,
            decimal_separator: '.',
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_zone: TimeZone::UTC,
        }
    }
}

impl DisplayLocale {
    /// Format an amount with two fractional digits and the currency prefix, e.g. `R$ 15.00`.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = rounded.abs().to_string();

        let digits = if self.decimal_separator == '.' {
            digits
        } else {
            digits.replace('.', &self.decimal_separator.to_string())
        };

        match currency_prefix(self.currency) {
            Some(prefix) => format!("{sign}{prefix}{digits}"),
            None => format!("{sign}{digits} {}", self.currency.iso_alpha_code),
        }
    }

    /// Format a timestamp as a short date in the locale's time zone.
    #[must_use]
    pub fn format_date(&self, timestamp: Timestamp) -> String {
        timestamp
            .to_zoned(self.time_zone.clone())
            .strftime(&self.date_format)
            .to_string()
    }
}

/// Look up a supported currency by ISO code.
#[must_use]
pub fn currency_for_code(code: &str) -> Option<&'static Currency> {
    match code.trim().to_ascii_uppercase().as_str() {
        "BRL" => Some(iso::BRL),
        "USD" => Some(iso::USD),
        "EUR" => Some(iso::EUR),
        "GBP" => Some(iso::GBP),
        _ => None,
    }
}

fn currency_prefix(currency: &Currency) -> Option<&'static str> {
    match currency.iso_alpha_code {
        "BRL" => Some("R$ "),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn prices_have_two_digits_and_prefix() {
        let locale = DisplayLocale::default();

        assert_eq!(locale.format_price(Decimal::new(15, 0)), "R$ 15.00");
        assert_eq!(locale.format_price(Decimal::new(1999, 2)), "R$ 19.99");
        assert_eq!(locale.format_price(Decimal::ZERO), "R$ 0.00");
    }

    #[test]
    fn prices_round_half_away_from_zero() {
        let locale = DisplayLocale::default();

        assert_eq!(locale.format_price(Decimal::new(12345, 3)), "R$ 12.35");
        assert_eq!(locale.format_price(Decimal::new(-5, 1)), "-R$ 0.50");
    }

    #[test]
    fn decimal_separator_is_localized() {
        let locale = DisplayLocale {
            decimal_separator: ',',
            ..DisplayLocale::default()
        };

        assert_eq!(locale.format_price(Decimal::new(1050, 2)), "R$ 10,50");
    }

    #[test]
    fn other_currencies_use_their_symbol() {
        let locale = DisplayLocale {
            currency: iso::GBP,
            ..DisplayLocale::default()
        };

        assert_eq!(locale.format_price(Decimal::new(3, 0)), "£3.00");
    }

    #[test]
    fn currencies_resolve_from_codes() {
        assert_eq!(
            currency_for_code("brl").map(|currency| currency.iso_alpha_code),
            Some("BRL")
        );
        assert!(currency_for_code("XYZ").is_none());
    }

    #[test]
    fn dates_use_short_format() -> TestResult {
        let locale = DisplayLocale::default();
        let timestamp: Timestamp = "2024-03-05T10:30:00Z".parse()?;

        assert_eq!(locale.format_date(timestamp), "05/03/2024");

        Ok(())
    }

    #[test]
    fn dates_follow_the_time_zone() -> TestResult {
        let locale = DisplayLocale {
            time_zone: TimeZone::fixed(jiff::tz::offset(-3)),
            ..DisplayLocale::default()
        };
        let timestamp: Timestamp = "2024-03-05T01:00:00Z".parse()?;

        assert_eq!(locale.format_date(timestamp), "04/03/2024");

        Ok(())
    }
}
