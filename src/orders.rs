//! Orders

use std::{fmt, num::ParseIntError, str::FromStr};

use jiff::{Timestamp, civil, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::ProductId;

/// Server-assigned order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for OrderId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,

    /// Customer name
    #[serde(rename = "cliente")]
    pub customer: String,

    /// Creation time
    #[serde(rename = "dataPedido", with = "timestamp")]
    pub created_at: Timestamp,

    /// Ordered line items
    #[serde(rename = "itens", default)]
    pub items: Vec<OrderItem>,

    /// Order total computed by the backend
    #[serde(rename = "valorTotalPedido", with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    /// Number of line items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Order line as returned by the backend. Name and price are snapshots taken when the
/// order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Ordered product
    #[serde(rename = "produto_id")]
    pub product: ProductId,

    /// Product name at order time
    #[serde(rename = "nome_produto")]
    pub product_name: String,

    /// Unit price at order time
    #[serde(rename = "preco_unitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    /// Ordered units
    #[serde(rename = "quantidade")]
    pub quantity: u32,

    /// Line total computed by the backend
    #[serde(rename = "valor_total_item", with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

/// Order submission body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Customer name
    #[serde(rename = "cliente")]
    pub customer: String,

    /// Requested lines, in form order
    #[serde(rename = "itens")]
    pub items: Vec<NewOrderItem>,
}

/// One requested order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    /// Product to order
    #[serde(rename = "produto_id")]
    pub product: ProductId,

    /// Units to order
    #[serde(rename = "quantidade")]
    pub quantity: u32,
}

/// Parse a backend timestamp. Datetimes without an offset are taken as UTC.
///
/// # Errors
///
/// Returns an error when the text is neither an RFC 3339 timestamp nor a civil datetime.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, jiff::Error> {
    raw.parse::<Timestamp>().or_else(|_offset_missing| {
        raw.parse::<civil::DateTime>()?
            .to_zoned(TimeZone::UTC)
            .map(|zoned| zoned.timestamp())
    })
}

mod timestamp {
    use jiff::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) fn serialize<S: Serializer>(
        value: &Timestamp,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;

        super::parse_timestamp(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn timestamps_with_offset_parse() -> TestResult {
        let parsed = parse_timestamp("2024-03-05T10:30:00-03:00")?;

        assert_eq!(parsed, "2024-03-05T13:30:00Z".parse::<Timestamp>()?);

        Ok(())
    }

    #[test]
    fn naive_timestamps_are_utc() -> TestResult {
        let parsed = parse_timestamp("2024-03-05T10:30:00.123456")?;

        assert_eq!(parsed, "2024-03-05T10:30:00.123456Z".parse::<Timestamp>()?);

        Ok(())
    }

    #[test]
    fn garbage_timestamps_fail() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn orders_decode_wire_names() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 7,
            "cliente": "Ana",
            "dataPedido": "2024-03-05T10:30:00",
            "valorTotalPedido": 15.0,
            "itens": [{
                "id": 1,
                "pedido_id": 7,
                "produto_id": 3,
                "nome_produto": "Widget",
                "quantidade": 3,
                "preco_unitario": 5.0,
                "valor_total_item": 15.0
            }]
        }))?;

        assert_eq!(order.id, OrderId(7));
        assert_eq!(order.customer, "Ana");
        assert_eq!(order.item_count(), 1);
        assert_eq!(order.total, Decimal::new(15, 0));
        assert_eq!(
            order.items.first().map(|item| item.product),
            Some(ProductId(3))
        );

        Ok(())
    }

    #[test]
    fn new_orders_serialize_with_wire_names() -> TestResult {
        let order = NewOrder {
            customer: "Ana".to_string(),
            items: vec![NewOrderItem {
                product: ProductId(3),
                quantity: 2,
            }],
        };

        assert_eq!(
            serde_json::to_value(order)?,
            json!({ "cliente": "Ana", "itens": [{ "produto_id": 3, "quantidade": 2 }] })
        );

        Ok(())
    }
}
