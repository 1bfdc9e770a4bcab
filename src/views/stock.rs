//! Stock levels.

use rust_decimal::Decimal;

use crate::{
    prices::DisplayLocale,
    products::{Product, ProductId, StockLevel},
    views::Tone,
};

/// Stock view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockView {
    /// One row per product, in backend order
    pub rows: Vec<StockRow>,
}

/// A stock row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Units in stock
    pub quantity: u32,

    /// Formatted unit price
    pub price: String,

    /// Value of the units in stock
    pub stock_value: Decimal,

    /// Formatted [`StockRow::stock_value`]
    pub stock_value_text: String,

    /// Three-tier level
    pub level: StockLevel,

    /// Level label
    pub label: &'static str,

    /// Level indicator
    pub tone: Tone,
}

impl StockRow {
    /// Prompt shown when adjusting this product's stock.
    #[must_use]
    pub fn adjust_prompt(&self) -> String {
        format!(
            "Ajustar estoque de \"{}\"\nQuantidade atual: {}\nNova quantidade:",
            self.name, self.quantity
        )
    }
}

impl StockView {
    /// Build the stock rows.
    #[must_use]
    pub fn build(products: &[Product], locale: &DisplayLocale) -> Self {
        let rows = products
            .iter()
            .map(|product| {
                let level = product.stock_level();
                let stock_value = product.stock_value();

                StockRow {
                    id: product.id,
                    name: product.name.clone(),
                    quantity: product.quantity,
                    price: locale.format_price(product.price),
                    stock_value,
                    stock_value_text: locale.format_price(stock_value),
                    level,
                    label: level.label(),
                    tone: level.tone(),
                }
            })
            .collect();

        Self { rows }
    }

    /// Row of a product, if present.
    #[must_use]
    pub fn row(&self, id: ProductId) -> Option<&StockRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, quantity: u32) -> Product {
        Product {
            id: ProductId(id),
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(500, 2),
            quantity,
        }
    }

    #[test]
    fn widget_row_values() {
        let view = StockView::build(&[product(1, 3)], &DisplayLocale::default());

        let row = view.row(ProductId(1));

        assert_eq!(row.map(|row| row.label), Some("Baixo Estoque"));
        assert_eq!(row.map(|row| row.stock_value), Some(Decimal::new(15, 0)));
        assert_eq!(
            row.map(|row| row.stock_value_text.as_str()),
            Some("R$ 15.00")
        );
    }

    #[test]
    fn tiers_map_to_tones() {
        let view = StockView::build(
            &[product(1, 0), product(2, 10), product(3, 11)],
            &DisplayLocale::default(),
        );

        let tones: Vec<Tone> = view.rows.iter().map(|row| row.tone).collect();

        assert_eq!(tones, vec![Tone::Danger, Tone::Warning, Tone::Success]);
        assert_eq!(view.row(ProductId(1)).map(|row| row.label), Some("Sem Estoque"));
    }

    #[test]
    fn adjust_prompt_mentions_current_quantity() {
        let view = StockView::build(&[product(1, 3)], &DisplayLocale::default());

        assert_eq!(
            view.row(ProductId(1)).map(StockRow::adjust_prompt),
            Some("Ajustar estoque de \"Widget\"\nQuantidade atual: 3\nNova quantidade:".to_string())
        );
    }
}
