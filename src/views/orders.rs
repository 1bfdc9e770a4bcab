//! Order list and order details.

use crate::{
    orders::{Order, OrderId},
    prices::DisplayLocale,
};

/// Order list view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdersView {
    /// One row per order, in backend order
    pub rows: Vec<OrderRow>,
}

/// An order list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    /// Order identifier
    pub id: OrderId,

    /// Customer name
    pub customer: String,

    /// Formatted order total
    pub total: String,

    /// Formatted order date
    pub date: String,

    /// Number of line items
    pub item_count: usize,

    /// Item count as text, e.g. `2 itens`
    pub items_label: String,
}

impl OrdersView {
    /// Build the order rows.
    #[must_use]
    pub fn build(orders: &[Order], locale: &DisplayLocale) -> Self {
        let rows = orders
            .iter()
            .map(|order| OrderRow {
                id: order.id,
                customer: order.customer.clone(),
                total: locale.format_price(order.total),
                date: locale.format_date(order.created_at),
                item_count: order.item_count(),
                items_label: format!("{} itens", order.item_count()),
            })
            .collect();

        Self { rows }
    }

    /// Whether there are no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Full breakdown of one order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsView {
    /// Order identifier
    pub id: OrderId,

    /// Heading, e.g. `Pedido #7`
    pub title: String,

    /// Customer name
    pub customer: String,

    /// Formatted order date
    pub date: String,

    /// Itemized lines, in order
    pub lines: Vec<OrderLine>,

    /// Formatted order total as computed by the backend
    pub total: String,
}

/// One itemized line of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product name at order time
    pub name: String,

    /// Ordered units
    pub quantity: u32,

    /// Formatted unit price
    pub unit_price: String,

    /// Formatted line total
    pub line_total: String,
}

impl OrderLine {
    /// One-line summary, e.g. `Widget - 3x R$ 5.00 = R$ 15.00`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} - {}x {} = {}",
            self.name, self.quantity, self.unit_price, self.line_total
        )
    }
}

impl OrderDetailsView {
    /// Build the breakdown of an order.
    #[must_use]
    pub fn build(order: &Order, locale: &DisplayLocale) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| OrderLine {
                name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: locale.format_price(item.unit_price),
                line_total: locale.format_price(item.line_total),
            })
            .collect();

        Self {
            id: order.id,
            title: format!("Pedido #{}", order.id),
            customer: order.customer.clone(),
            date: locale.format_date(order.created_at),
            lines,
            total: locale.format_price(order.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::{orders::OrderItem, products::ProductId};

    fn order() -> TestResult<Order> {
        Ok(Order {
            id: OrderId(7),
            customer: "Ana".to_string(),
            created_at: "2024-03-05T10:30:00Z".parse::<Timestamp>()?,
            items: vec![
                OrderItem {
                    product: ProductId(1),
                    product_name: "Widget".to_string(),
                    unit_price: Decimal::new(5, 0),
                    quantity: 3,
                    line_total: Decimal::new(15, 0),
                },
                OrderItem {
                    product: ProductId(2),
                    product_name: "Gadget".to_string(),
                    unit_price: Decimal::new(250, 2),
                    quantity: 2,
                    line_total: Decimal::new(5, 0),
                },
            ],
            // Deliberately not the sum of the lines: the backend total is shown as-is.
            total: Decimal::new(21, 0),
        })
    }

    #[test]
    fn rows_show_item_count_and_date() -> TestResult {
        let view = OrdersView::build(&[order()?], &DisplayLocale::default());

        let row = view.rows.first().ok_or("missing row")?;

        assert_eq!(row.items_label, "2 itens");
        assert_eq!(row.date, "05/03/2024");
        assert_eq!(row.total, "R$ 21.00");

        Ok(())
    }

    #[test]
    fn details_use_backend_total() -> TestResult {
        let details = OrderDetailsView::build(&order()?, &DisplayLocale::default());

        assert_eq!(details.title, "Pedido #7");
        assert_eq!(details.total, "R$ 21.00");
        assert_eq!(
            details.lines.first().map(OrderLine::summary),
            Some("Widget - 3x R$ 5.00 = R$ 15.00".to_string())
        );

        Ok(())
    }
}
