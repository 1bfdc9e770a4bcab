//! Product catalog.

use rust_decimal::Decimal;

use crate::{
    prices::DisplayLocale,
    products::{Product, ProductBadge, ProductId},
    views::Tone,
};

/// Placeholder for a missing description.
pub const NO_DESCRIPTION: &str = "-";

/// Product catalog view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsView {
    /// One row per product, in backend order
    pub rows: Vec<ProductRow>,
}

/// A catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Description or [`NO_DESCRIPTION`]
    pub description: String,

    /// Unit price
    pub price: Decimal,

    /// Formatted unit price
    pub price_text: String,

    /// Units in stock
    pub quantity: u32,

    /// Two-tier status badge
    pub badge: ProductBadge,

    /// Badge label
    pub label: &'static str,

    /// Badge indicator
    pub tone: Tone,
}

impl ProductsView {
    /// Build the catalog rows.
    #[must_use]
    pub fn build(products: &[Product], locale: &DisplayLocale) -> Self {
        let rows = products
            .iter()
            .map(|product| {
                let badge = product.badge();

                ProductRow {
                    id: product.id,
                    name: product.name.clone(),
                    description: product
                        .description
                        .as_deref()
                        .map(str::trim)
                        .filter(|description| !description.is_empty())
                        .unwrap_or(NO_DESCRIPTION)
                        .to_string(),
                    price: product.price,
                    price_text: locale.format_price(product.price),
                    quantity: product.quantity,
                    badge,
                    label: badge.label(),
                    tone: badge.tone(),
                }
            })
            .collect();

        Self { rows }
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product {
            id: ProductId(1),
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(500, 2),
            quantity: 3,
        }
    }

    #[test]
    fn widget_row_has_low_stock_badge() {
        let view = ProductsView::build(&[widget()], &DisplayLocale::default());

        let row = view.rows.first();

        assert_eq!(row.map(|row| row.label), Some("Baixo Estoque"));
        assert_eq!(row.map(|row| row.tone), Some(Tone::Warning));
        assert_eq!(row.map(|row| row.price_text.as_str()), Some("R$ 5.00"));
    }

    #[test]
    fn blank_descriptions_use_placeholder() {
        let products = [
            widget(),
            Product {
                description: Some(String::new()),
                ..widget()
            },
            Product {
                description: Some("Azul".to_string()),
                ..widget()
            },
        ];

        let view = ProductsView::build(&products, &DisplayLocale::default());

        let descriptions: Vec<&str> = view
            .rows
            .iter()
            .map(|row| row.description.as_str())
            .collect();

        assert_eq!(descriptions, vec!["-", "-", "Azul"]);
    }

    #[test]
    fn zero_stock_is_not_distinguished() {
        let view = ProductsView::build(
            &[Product {
                quantity: 0,
                ..widget()
            }],
            &DisplayLocale::default(),
        );

        assert_eq!(
            view.rows.first().map(|row| row.badge),
            Some(ProductBadge::LowStock)
        );
    }
}
