use estoque::views::stock::StockRow;
use leptos::prelude::*;

use crate::console::Console;

const NO_STOCK: &str = "Nenhum produto em estoque";

fn stock_row(console: Console, row: StockRow) -> impl IntoView {
    let id = row.id;
    let prompt = row.adjust_prompt();
    let quantity = RwSignal::new(row.quantity.to_string());

    view! {
        <tr>
            <td>{row.name}</td>
            <td class="amount">{row.price}</td>
            <td class="amount">{row.quantity}</td>
            <td class="amount">{row.stock_value_text}</td>
            <td>
                <span class=format!("badge badge-{}", row.tone.class())>{row.label}</span>
            </td>
            <td class="actions">
                <input
                    type="number"
                    min="0"
                    class="input-small"
                    title=prompt
                    prop:value=move || quantity.get()
                    on:input=move |event| quantity.set(event_target_value(&event))
                />
                <button
                    type="button"
                    class="btn btn-small"
                    on:click=move |_| console.adjust_stock(id, quantity.get_untracked())
                >
                    "Ajustar"
                </button>
            </td>
        </tr>
    }
}

/// Stock levels section.
#[component]
pub(crate) fn StockPanel(console: Console) -> impl IntoView {
    let stock = console.screens.stock;

    view! {
        <h2>"Controle de Estoque"</h2>
        <table class="table">
            <thead>
                <tr>
                    <th>"Produto"</th>
                    <th>"Preço"</th>
                    <th>"Quantidade"</th>
                    <th>"Valor em Estoque"</th>
                    <th>"Status"</th>
                    <th>"Ajustar"</th>
                </tr>
            </thead>
            <tbody>
                {move || match stock.get() {
                    Some(view) if !view.rows.is_empty() => view
                        .rows
                        .into_iter()
                        .map(|row| stock_row(console, row))
                        .collect_view()
                        .into_any(),
                    Some(_) => view! {
                        <tr><td colspan="6" class="text-muted">{NO_STOCK}</td></tr>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </tbody>
        </table>
    }
}
