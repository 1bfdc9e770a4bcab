//! Tables for the terminal.

use estoque::{
    navigation::SectionView,
    views::{
        Listing, Tone,
        dashboard::DashboardView,
        orders::{OrderDetailsView, OrdersView},
        products::ProductsView,
        stock::StockView,
    },
};
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Shown instead of an empty catalog.
const NO_PRODUCTS: &str = "Nenhum produto cadastrado";

/// Shown instead of an empty order list.
const NO_ORDERS: &str = "Nenhum pedido encontrado";

pub(crate) fn section(view: &SectionView) -> String {
    match view {
        SectionView::Dashboard(view) => dashboard(view),
        SectionView::Products(view) => products(view),
        SectionView::Orders(view) => orders(view),
        SectionView::Stock(view) => stock(view),
    }
}

pub(crate) fn dashboard(view: &DashboardView) -> String {
    let summary = [
        format!("Produtos: {}", view.product_count),
        format!("Pedidos: {}", view.order_count),
        format!("Baixo estoque: {}", view.low_stock_count),
        format!("Valor em estoque: {}", view.stock_value_text),
    ]
    .join("\n");

    let recent = listing(&view.recent_orders, |rows| {
        let mut builder = Builder::default();

        builder.push_record(["ID", "Cliente", "Total", "Data"]);

        for row in rows {
            builder.push_record([
                format!("#{}", row.id),
                row.customer.clone(),
                row.total.clone(),
                row.date.clone(),
            ]);
        }

        finish(builder, Columns::new(2..3)).to_string()
    });

    let low_stock = listing(&view.low_stock, |rows| {
        let mut builder = Builder::default();

        builder.push_record(["Produto", "Estoque"]);

        for row in rows {
            builder.push_record([row.name.clone(), row.units.clone()]);
        }

        let mut table = finish(builder, Columns::new(1..2));

        for index in 1..=rows.len() {
            table.modify((index, 1), tone_color(Tone::Warning));
        }

        table.to_string()
    });

    format!(
        "{summary}\n\nPedidos recentes\n{recent}\n\nProdutos em baixo estoque\n{low_stock}"
    )
}

pub(crate) fn products(view: &ProductsView) -> String {
    if view.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Nome", "Descrição", "Preço", "Estoque", "Status"]);

    for row in &view.rows {
        builder.push_record([
            row.id.to_string(),
            row.name.clone(),
            row.description.clone(),
            row.price_text.clone(),
            row.quantity.to_string(),
            row.label.to_string(),
        ]);
    }

    let mut table = finish(builder, Columns::new(3..5));

    for (index, row) in view.rows.iter().enumerate() {
        table.modify((index + 1, 5), tone_color(row.tone));
    }

    table.to_string()
}

pub(crate) fn orders(view: &OrdersView) -> String {
    if view.is_empty() {
        return NO_ORDERS.to_string();
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Cliente", "Total", "Data", "Itens"]);

    for row in &view.rows {
        builder.push_record([
            format!("#{}", row.id),
            row.customer.clone(),
            row.total.clone(),
            row.date.clone(),
            row.items_label.clone(),
        ]);
    }

    finish(builder, Columns::new(2..3)).to_string()
}

pub(crate) fn order_details(view: &OrderDetailsView) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Produto", "Qtd", "Preço unit.", "Total"]);

    for line in &view.lines {
        builder.push_record([
            line.name.clone(),
            line.quantity.to_string(),
            line.unit_price.clone(),
            line.line_total.clone(),
        ]);
    }

    let table = finish(builder, Columns::new(1..4));

    format!(
        "{}\nCliente: {}\nData: {}\n\n{table}\n\nTotal: {}",
        view.title, view.customer, view.date, view.total
    )
}

pub(crate) fn stock(view: &StockView) -> String {
    if view.rows.is_empty() {
        return NO_PRODUCTS.to_string();
    }

    let mut builder = Builder::default();

    builder.push_record([
        "ID",
        "Produto",
        "Quantidade",
        "Preço",
        "Valor em estoque",
        "Status",
    ]);

    for row in &view.rows {
        builder.push_record([
            row.id.to_string(),
            row.name.clone(),
            row.quantity.to_string(),
            row.price.clone(),
            row.stock_value_text.clone(),
            row.label.to_string(),
        ]);
    }

    let mut table = finish(builder, Columns::new(2..5));

    for (index, row) in view.rows.iter().enumerate() {
        table.modify((index + 1, 5), tone_color(row.tone));
    }

    table.to_string()
}

fn listing<T>(listing: &Listing<T>, render: impl FnOnce(&[T]) -> String) -> String {
    match listing {
        Listing::Rows(rows) => render(rows),
        Listing::Empty(placeholder) => (*placeholder).to_string(),
    }
}

fn finish(builder: Builder, amounts: Columns<std::ops::Range<usize>>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(amounts, Alignment::right());

    table
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::FG_GREEN,
        Tone::Warning => Color::FG_YELLOW,
        Tone::Danger => Color::FG_RED,
    }
}
