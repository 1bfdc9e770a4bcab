//! Order builder: the multi-row draft behind the "new order" form.

use std::fmt;

use rust_decimal::Decimal;

use crate::{
    orders::{NewOrder, NewOrderItem},
    prices::DisplayLocale,
    products::{Product, ProductId},
    validation::ValidationError,
};

/// Stable per-session row number. Numbers start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A product the user can pick in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Option label, e.g. `Widget - R$ 5.00`
    pub label: String,
}

impl ProductOption {
    /// Option for a product.
    #[must_use]
    pub fn from_product(product: &Product, locale: &DisplayLocale) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            label: format!("{} - {}", product.name, locale.format_price(product.price)),
        }
    }
}

/// One line of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    /// Row number
    pub id: RowId,

    /// Selected product
    pub product: Option<ProductId>,

    /// Unit price of the selected product
    pub unit_price: Option<Decimal>,

    /// Quantity field, as typed
    pub quantity: String,
}

impl DraftRow {
    fn new(id: RowId) -> Self {
        Self {
            id,
            product: None,
            unit_price: None,
            quantity: String::new(),
        }
    }

    /// The quantity, when the field holds a positive whole number.
    #[must_use]
    pub fn quantity(&self) -> Option<u32> {
        self.quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)
    }

    /// `unit price × quantity`, with a missing price or quantity counting as zero.
    /// Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        let price = self.unit_price.unwrap_or(Decimal::ZERO);
        let quantity = self.quantity().map_or(Decimal::ZERO, Decimal::from);

        price.saturating_mul(quantity)
    }

    /// Whether both a product and a quantity are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.product.is_some() && self.quantity().is_some()
    }
}

/// Draft order being assembled in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Customer field, as typed
    pub customer: String,

    rows: Vec<DraftRow>,
    next_row: u32,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// A draft with a single empty row numbered 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customer: String::new(),
            rows: vec![DraftRow::new(RowId(1))],
            next_row: 2,
        }
    }

    /// Rows in form order.
    #[must_use]
    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    /// A row by number.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&DraftRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut DraftRow> {
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Replace the customer field.
    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.customer = customer.into();
    }

    /// Append an empty row and return its number.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.next_row);

        self.next_row += 1;
        self.rows.push(DraftRow::new(id));

        id
    }

    /// Remove a row. Returns whether it existed.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        let before = self.rows.len();

        self.rows.retain(|row| row.id != id);

        self.rows.len() != before
    }

    /// Select (or clear, with `None`) a row's product. The unit price follows the option.
    pub fn select_product(&mut self, id: RowId, option: Option<&ProductOption>) {
        if let Some(row) = self.row_mut(id) {
            row.product = option.map(|option| option.id);
            row.unit_price = option.map(|option| option.price);
        }
    }

    /// Replace a row's quantity field.
    pub fn set_quantity(&mut self, id: RowId, quantity: impl Into<String>) {
        if let Some(row) = self.row_mut(id) {
            row.quantity = quantity.into();
        }
    }

    /// Sum of every row's line total.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.rows
            .iter()
            .map(DraftRow::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Build the submission body from the complete rows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IncompleteOrder`] when the customer is blank or no row
    /// has both a product and a quantity.
    pub fn to_new_order(&self) -> Result<NewOrder, ValidationError> {
        let customer = self.customer.trim();

        let items: Vec<NewOrderItem> = self
            .rows
            .iter()
            .filter_map(|row| {
                Some(NewOrderItem {
                    product: row.product?,
                    quantity: row.quantity()?,
                })
            })
            .collect();

        if customer.is_empty() || items.is_empty() {
            return Err(ValidationError::IncompleteOrder);
        }

        Ok(NewOrder {
            customer: customer.to_string(),
            items,
        })
    }

    /// Discard everything and start over with a single row numbered 1.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn option(id: u64, price: Decimal) -> ProductOption {
        ProductOption::from_product(
            &Product {
                id: ProductId(id),
                name: format!("P{id}"),
                description: None,
                price,
                quantity: 10,
            },
            &DisplayLocale::default(),
        )
    }

    #[test]
    fn oversized_totals_saturate() {
        let expensive = option(1, Decimal::MAX);
        let mut draft = OrderDraft::new();
        let second = draft.add_row();

        for row in [RowId(1), second] {
            draft.select_product(row, Some(&expensive));
            draft.set_quantity(row, "2");
        }

        assert_eq!(
            draft.row(second).map(DraftRow::line_total),
            Some(Decimal::MAX)
        );
        assert_eq!(draft.grand_total(), Decimal::MAX);
    }

    #[test]
    fn starts_with_row_one() {
        let draft = OrderDraft::new();

        assert_eq!(draft.rows().len(), 1);
        assert_eq!(draft.rows().first().map(|row| row.id), Some(RowId(1)));
    }

    #[test]
    fn row_numbers_are_never_reused() {
        let mut draft = OrderDraft::new();

        let second = draft.add_row();
        assert!(draft.remove_row(second));
        let third = draft.add_row();

        assert_eq!(second, RowId(2));
        assert_eq!(third, RowId(3));
        assert!(!draft.remove_row(second));
    }

    #[test]
    fn option_label_includes_price() {
        assert_eq!(option(1, Decimal::new(5, 0)).label, "P1 - R$ 5.00");
    }

    #[test]
    fn totals_follow_selection_and_quantity() {
        let mut draft = OrderDraft::new();
        let first = RowId(1);
        let second = draft.add_row();

        draft.select_product(first, Some(&option(1, Decimal::new(5, 0))));
        assert_eq!(draft.grand_total(), Decimal::ZERO);

        draft.set_quantity(first, "3");
        draft.select_product(second, Some(&option(2, Decimal::new(250, 2))));
        draft.set_quantity(second, "2");

        assert_eq!(
            draft.row(first).map(DraftRow::line_total),
            Some(Decimal::new(15, 0))
        );
        assert_eq!(draft.grand_total(), Decimal::new(20, 0));

        draft.select_product(second, None);

        assert_eq!(draft.row(second).and_then(|row| row.unit_price), None);
        assert_eq!(draft.grand_total(), Decimal::new(15, 0));

        draft.remove_row(first);

        assert_eq!(draft.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn invalid_quantities_count_as_zero() {
        let mut draft = OrderDraft::new();

        draft.select_product(RowId(1), Some(&option(1, Decimal::new(5, 0))));
        draft.set_quantity(RowId(1), "abc");

        assert_eq!(draft.grand_total(), Decimal::ZERO);
        assert!(!draft.rows().iter().any(DraftRow::is_complete));
    }

    #[test]
    fn submission_keeps_complete_rows_in_order() -> TestResult {
        let mut draft = OrderDraft::new();
        let second = draft.add_row();
        let third = draft.add_row();

        draft.set_customer("  Ana ");
        draft.select_product(RowId(1), Some(&option(4, Decimal::ONE)));
        draft.set_quantity(RowId(1), "1");
        draft.select_product(second, Some(&option(5, Decimal::ONE)));
        draft.select_product(third, Some(&option(6, Decimal::ONE)));
        draft.set_quantity(third, "2");

        let order = draft.to_new_order()?;

        assert_eq!(order.customer, "Ana");
        assert_eq!(
            order.items,
            vec![
                NewOrderItem {
                    product: ProductId(4),
                    quantity: 1
                },
                NewOrderItem {
                    product: ProductId(6),
                    quantity: 2
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn submission_requires_customer_and_an_item() {
        let mut draft = OrderDraft::new();

        draft.select_product(RowId(1), Some(&option(1, Decimal::ONE)));
        draft.set_quantity(RowId(1), "1");

        assert_eq!(draft.to_new_order(), Err(ValidationError::IncompleteOrder));

        draft.set_customer("Ana");
        draft.set_quantity(RowId(1), "0");

        assert_eq!(draft.to_new_order(), Err(ValidationError::IncompleteOrder));
    }

    #[test]
    fn reset_restores_a_single_row_one() {
        let mut draft = OrderDraft::new();

        draft.add_row();
        draft.add_row();
        draft.set_customer("Ana");
        draft.reset();

        assert_eq!(draft, OrderDraft::new());
    }
}
