//! Local input validation, performed before any request is sent.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected on the client without a network attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Order submitted without a customer or without a complete item row.
    #[error("Preencha o cliente e pelo menos um item")]
    IncompleteOrder,

    /// A stock quantity below zero.
    #[error("A quantidade deve ser maior ou igual a zero")]
    NegativeQuantity,

    /// A quantity that is not a whole number.
    #[error("Quantidade inválida: {0}")]
    InvalidQuantity(String),

    /// A price that is not a non-negative decimal.
    #[error("Preço inválido: {0}")]
    InvalidPrice(String),

    /// A product without a name.
    #[error("Informe o nome do produto")]
    MissingName,
}

/// Parse a non-negative whole quantity.
///
/// # Errors
///
/// Returns [`ValidationError::NegativeQuantity`] for values below zero and
/// [`ValidationError::InvalidQuantity`] for anything that is not a whole number.
pub fn parse_quantity(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();

    let value = trimmed
        .parse::<i64>()
        .map_err(|_err| ValidationError::InvalidQuantity(trimmed.to_string()))?;

    if value < 0 {
        return Err(ValidationError::NegativeQuantity);
    }

    u32::try_from(value).map_err(|_err| ValidationError::InvalidQuantity(trimmed.to_string()))
}

/// Parse a non-negative decimal price. Both `.` and `,` are accepted as the decimal separator.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] when the input is not a non-negative decimal.
pub fn parse_price(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();

    let price = Decimal::from_str(&trimmed.replace(',', "."))
        .map_err(|_err| ValidationError::InvalidPrice(trimmed.to_string()))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::InvalidPrice(trimmed.to_string()));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn quantity_accepts_zero_and_surrounding_whitespace() -> TestResult {
        assert_eq!(parse_quantity("0")?, 0);
        assert_eq!(parse_quantity(" 12 ")?, 12);

        Ok(())
    }

    #[test]
    fn quantity_rejects_negative_values() {
        assert_eq!(parse_quantity("-1"), Err(ValidationError::NegativeQuantity));
    }

    #[test]
    fn quantity_rejects_fractions_and_text() {
        assert_eq!(
            parse_quantity("2.5"),
            Err(ValidationError::InvalidQuantity("2.5".to_string()))
        );
        assert_eq!(
            parse_quantity("abc"),
            Err(ValidationError::InvalidQuantity("abc".to_string()))
        );
    }

    #[test]
    fn price_accepts_comma_separator() -> TestResult {
        assert_eq!(parse_price("19,90")?, Decimal::new(1990, 2));
        assert_eq!(parse_price("5")?, Decimal::new(5, 0));

        Ok(())
    }

    #[test]
    fn price_rejects_negative_and_garbage() {
        assert_eq!(
            parse_price("-3"),
            Err(ValidationError::InvalidPrice("-3".to_string()))
        );
        assert_eq!(
            parse_price(""),
            Err(ValidationError::InvalidPrice(String::new()))
        );
    }

    #[test]
    fn incomplete_order_message_is_user_facing() {
        assert_eq!(
            ValidationError::IncompleteOrder.to_string(),
            "Preencha o cliente e pelo menos um item"
        );
    }
}
