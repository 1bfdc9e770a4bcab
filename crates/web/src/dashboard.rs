use estoque::views::{Listing, dashboard::DashboardView};
use leptos::prelude::*;

use crate::console::Console;

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{value}</p>
        </div>
    }
}

fn placeholder(text: &'static str) -> AnyView {
    view! { <p class="text-muted">{text}</p> }.into_any()
}

fn summary(view: DashboardView) -> AnyView {
    let recent = match view.recent_orders {
        Listing::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div class="list-row">
                        <span>{format!("#{} - {}", row.id, row.customer)}</span>
                        <span>{row.total}</span>
                        <span class="text-muted">{row.date}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        Listing::Empty(text) => placeholder(text),
    };

    let low_stock = match view.low_stock {
        Listing::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <div class="list-row">
                        <span>{row.name}</span>
                        <span class="badge badge-warning">{row.units}</span>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
        Listing::Empty(text) => placeholder(text),
    };

    view! {
        <div class="stats">
            <StatCard label="Total de Produtos" value=view.product_count.to_string() />
            <StatCard label="Total de Pedidos" value=view.order_count.to_string() />
            <StatCard label="Baixo Estoque" value=view.low_stock_count.to_string() />
            <StatCard label="Valor em Estoque" value=view.stock_value_text />
        </div>
        <div class="panels">
            <div class="panel">
                <h3>"Pedidos Recentes"</h3>
                {recent}
            </div>
            <div class="panel">
                <h3>"Produtos com Baixo Estoque"</h3>
                {low_stock}
            </div>
        </div>
    }
    .into_any()
}

/// Dashboard section.
#[component]
pub(crate) fn DashboardPanel(console: Console) -> impl IntoView {
    let dashboard = console.screens.dashboard;

    view! {
        <h2>"Dashboard"</h2>
        {move || dashboard.get().map_or_else(|| placeholder("Carregando..."), summary)}
    }
}
