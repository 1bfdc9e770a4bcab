//! Dashboard summary.

use rust_decimal::Decimal;

use crate::{
    orders::{Order, OrderId},
    prices::DisplayLocale,
    products::{Product, ProductId},
    views::Listing,
};

/// Number of orders listed under "recent orders".
pub const RECENT_ORDERS: usize = 5;

/// Shown when there are no orders.
pub const NO_ORDERS: &str = "Nenhum pedido encontrado";

/// Shown when no product is low on stock.
pub const NO_LOW_STOCK: &str = "Nenhum produto em baixo estoque";

/// Dashboard view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Number of products
    pub product_count: usize,

    /// Number of orders
    pub order_count: usize,

    /// Number of products under the low-stock threshold
    pub low_stock_count: usize,

    /// Value of all units in stock
    pub stock_value: Decimal,

    /// Formatted [`DashboardView::stock_value`]
    pub stock_value_text: String,

    /// Newest orders first
    pub recent_orders: Listing<RecentOrderRow>,

    /// Products under the low-stock threshold
    pub low_stock: Listing<LowStockRow>,
}

/// One of the most recent orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentOrderRow {
    /// Order identifier
    pub id: OrderId,

    /// Customer name
    pub customer: String,

    /// Formatted order total
    pub total: String,

    /// Formatted order date
    pub date: String,
}

/// A product running low.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockRow {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Units left
    pub quantity: u32,

    /// Units left as text, e.g. `3 unidades`
    pub units: String,
}

impl DashboardView {
    /// Summarise the product and order snapshots.
    #[must_use]
    pub fn build(products: &[Product], orders: &[Order], locale: &DisplayLocale) -> Self {
        let stock_value = total_stock_value(products);

        let recent_orders = orders
            .iter()
            .rev()
            .take(RECENT_ORDERS)
            .map(|order| RecentOrderRow {
                id: order.id,
                customer: order.customer.clone(),
                total: locale.format_price(order.total),
                date: locale.format_date(order.created_at),
            })
            .collect();

        let low_stock: Vec<LowStockRow> = products
            .iter()
            .filter(|product| product.is_low_stock())
            .map(|product| LowStockRow {
                id: product.id,
                name: product.name.clone(),
                quantity: product.quantity,
                units: format!("{} unidades", product.quantity),
            })
            .collect();

        Self {
            product_count: products.len(),
            order_count: orders.len(),
            low_stock_count: low_stock.len(),
            stock_value,
            stock_value_text: locale.format_price(stock_value),
            recent_orders: Listing::from_rows(recent_orders, NO_ORDERS),
            low_stock: Listing::from_rows(low_stock, NO_LOW_STOCK),
        }
    }
}

/// Sum of `price × quantity` over every product, saturating at [`Decimal::MAX`].
#[must_use]
pub fn total_stock_value(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(Product::stock_value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn product(id: u64, price: Decimal, quantity: u32) -> Product {
        Product {
            id: ProductId(id),
            name: format!("P{id}"),
            description: None,
            price,
            quantity,
        }
    }

    fn order(id: u64) -> Order {
        Order {
            id: OrderId(id),
            customer: format!("Cliente {id}"),
            created_at: Timestamp::UNIX_EPOCH,
            items: Vec::new(),
            total: Decimal::new(10, 0),
        }
    }

    #[test]
    fn oversized_stock_value_saturates() {
        let products = [
            product(1, Decimal::MAX, 2),
            product(2, Decimal::MAX, 1),
        ];

        let view = DashboardView::build(&products, &[], &DisplayLocale::default());

        assert_eq!(view.stock_value, Decimal::MAX);
        assert!(
            view.stock_value_text.starts_with("R$ "),
            "saturated value still renders: {}",
            view.stock_value_text
        );
    }

    #[test]
    fn counts_and_stock_value() {
        let products = [
            product(1, Decimal::new(500, 2), 3),
            product(2, Decimal::new(2, 0), 10),
            product(3, Decimal::new(1, 0), 0),
        ];

        let view = DashboardView::build(&products, &[], &DisplayLocale::default());

        assert_eq!(view.product_count, 3);
        assert_eq!(view.order_count, 0);
        assert_eq!(view.low_stock_count, 2);
        assert_eq!(view.stock_value, Decimal::new(35, 0));
        assert_eq!(view.stock_value_text, "R$ 35.00");
    }

    #[test]
    fn recent_orders_are_last_five_newest_first() {
        let orders: Vec<Order> = (1..=7).map(order).collect();

        let view = DashboardView::build(&[], &orders, &DisplayLocale::default());

        let ids: Vec<u64> = view.recent_orders.rows().iter().map(|row| row.id.0).collect();

        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
        assert_eq!(
            view.recent_orders.rows().first().map(|row| row.date.as_str()),
            Some("01/01/1970")
        );
    }

    #[test]
    fn low_stock_rows_carry_units_text() {
        let products = [product(1, Decimal::ONE, 3), product(2, Decimal::ONE, 50)];

        let view = DashboardView::build(&products, &[], &DisplayLocale::default());

        assert_eq!(view.low_stock.rows().len(), 1);
        assert_eq!(
            view.low_stock.rows().first().map(|row| row.units.as_str()),
            Some("3 unidades")
        );
    }

    #[test]
    fn empty_lists_show_placeholders() {
        let view = DashboardView::build(&[], &[], &DisplayLocale::default());

        assert_eq!(view.recent_orders.placeholder(), Some(NO_ORDERS));
        assert_eq!(view.low_stock.placeholder(), Some(NO_LOW_STOCK));
        assert_eq!(view.stock_value, Decimal::ZERO);
    }
}
