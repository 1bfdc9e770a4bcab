use estoque::{
    builder::{DraftRow, OrderDraft, ProductOption, RowId},
    notifications::Confirmation,
    products::ProductId,
    views::orders::OrderRow,
};
use leptos::prelude::*;

use crate::console::Console;

const NO_ORDERS: &str = "Nenhum pedido encontrado";

fn order_row(console: Console, row: OrderRow) -> impl IntoView {
    let id = row.id;

    view! {
        <tr>
            <td>{format!("#{}", row.id)}</td>
            <td>{row.customer}</td>
            <td>{row.date}</td>
            <td>{row.items_label}</td>
            <td class="amount">{row.total}</td>
            <td class="actions">
                <button
                    type="button"
                    class="btn btn-small"
                    on:click=move |_| console.show_details(id)
                >
                    "Detalhes"
                </button>
                <button
                    type="button"
                    class="btn btn-small btn-danger"
                    on:click=move |_| {
                        console.screens.confirmation.set(Some(Confirmation::DeleteOrder(id)));
                    }
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}

/// Order list section.
#[component]
pub(crate) fn OrdersPanel(console: Console) -> impl IntoView {
    let orders = console.screens.orders;

    view! {
        <div class="section-header">
            <h2>"Pedidos"</h2>
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| console.open_order_builder()
            >
                "Novo Pedido"
            </button>
        </div>
        <table class="table">
            <thead>
                <tr>
                    <th>"Pedido"</th>
                    <th>"Cliente"</th>
                    <th>"Data"</th>
                    <th>"Itens"</th>
                    <th>"Total"</th>
                    <th>"Ações"</th>
                </tr>
            </thead>
            <tbody>
                {move || match orders.get() {
                    Some(view) if !view.is_empty() => view
                        .rows
                        .into_iter()
                        .map(|row| order_row(console, row))
                        .collect_view()
                        .into_any(),
                    Some(_) => view! {
                        <tr><td colspan="6" class="text-muted">{NO_ORDERS}</td></tr>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </tbody>
        </table>
    }
}

/// Picker value for the selected product, empty when nothing is picked.
fn selected_value(row: &DraftRow) -> String {
    row.product.map(|id| id.to_string()).unwrap_or_default()
}

fn parse_selection(value: &str) -> Option<ProductId> {
    value.parse().ok().map(ProductId)
}

/// Unit price of the picked product, empty until a product is picked.
fn unit_price_text(console: Console, row: Option<&DraftRow>) -> String {
    row.and_then(|row| row.unit_price)
        .map(|price| console.format_price(price))
        .unwrap_or_default()
}

fn draft_row(console: Console, id: RowId) -> impl IntoView {
    let draft = console.screens.draft;
    let options = console.screens.options;

    let row = move || draft.with(|draft| draft.as_ref().and_then(|draft| draft.row(id)).cloned());

    view! {
        <div class="order-row">
            <select
                prop:value=move || row().as_ref().map(selected_value).unwrap_or_default()
                on:change=move |event| {
                    let product = parse_selection(&event_target_value(&event));

                    let option = product.and_then(|product| {
                        options.with_untracked(|options| {
                            options.iter().find(|option| option.id == product).cloned()
                        })
                    });

                    draft.update(|draft| {
                        if let Some(draft) = draft {
                            draft.select_product(id, option.as_ref());
                        }
                    });
                }
            >
                <option value="">"Selecione um produto"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option: ProductOption| {
                            view! { <option value=option.id.to_string()>{option.label}</option> }
                        })
                        .collect_view()
                }}
            </select>
            <input
                type="number"
                min="1"
                placeholder="Qtd"
                prop:value=move || row().map(|row| row.quantity).unwrap_or_default()
                on:input=move |event| {
                    let quantity = event_target_value(&event);

                    draft.update(|draft| {
                        if let Some(draft) = draft {
                            draft.set_quantity(id, quantity);
                        }
                    });
                }
            />
            <input
                type="text"
                class="amount"
                placeholder="Preço"
                readonly
                prop:value=move || unit_price_text(console, row().as_ref())
            />
            <span class="amount">
                {move || console.format_price(row().map(|row| row.line_total()).unwrap_or_default())}
            </span>
            <button
                type="button"
                class="btn btn-small btn-danger"
                aria-label="Remover item"
                on:click=move |_| {
                    draft.update(|draft| {
                        if let Some(draft) = draft {
                            draft.remove_row(id);
                        }
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Multi-row order builder.
#[component]
pub(crate) fn OrderBuilderModal(console: Console) -> impl IntoView {
    let draft = console.screens.draft;

    let row_ids = move || {
        draft.with(|draft| {
            draft
                .as_ref()
                .map(|draft| draft.rows().iter().map(|row| row.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    let grand_total = move || {
        draft.with(|draft| draft.as_ref().map(OrderDraft::grand_total).unwrap_or_default())
    };

    view! {
        <Show when=move || draft.with(Option::is_some)>
            <div class="modal-backdrop">
                <form
                    class="modal modal-wide"
                    on:submit=move |event| {
                        event.prevent_default();
                        console.submit_order();
                    }
                >
                    <h3>"Novo Pedido"</h3>
                    <label>
                        "Cliente"
                        <input
                            type="text"
                            required
                            prop:value=move || {
                                draft.with(|draft| {
                                    draft.as_ref().map(|draft| draft.customer.clone()).unwrap_or_default()
                                })
                            }
                            on:input=move |event| {
                                let customer = event_target_value(&event);

                                draft.update(|draft| {
                                    if let Some(draft) = draft {
                                        draft.set_customer(customer);
                                    }
                                });
                            }
                        />
                    </label>
                    <div class="order-rows">
                        <For
                            each=row_ids
                            key=|id| *id
                            children=move |id| draft_row(console, id)
                        />
                    </div>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| {
                            draft.update(|draft| {
                                if let Some(draft) = draft {
                                    draft.add_row();
                                }
                            });
                        }
                    >
                        "Adicionar Item"
                    </button>
                    <p class="order-total">
                        "Total: "
                        <strong>{move || console.format_price(grand_total())}</strong>
                    </p>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| draft.set(None)
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            "Criar Pedido"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// Read-only breakdown of a single order.
#[component]
pub(crate) fn OrderDetailsModal(console: Console) -> impl IntoView {
    let details = console.screens.details;

    view! {
        {move || {
            details
                .get()
                .map_or_else(
                    || ().into_any(),
                    |view| {
                        view! {
                            <div class="modal-backdrop">
                                <div class="modal">
                                    <h3>{view.title}</h3>
                                    <p>
                                        <strong>"Cliente: "</strong>
                                        {view.customer}
                                    </p>
                                    <p>
                                        <strong>"Data: "</strong>
                                        {view.date}
                                    </p>
                                    <ul class="order-lines">
                                        {view
                                            .lines
                                            .iter()
                                            .map(|line| view! { <li>{line.summary()}</li> })
                                            .collect_view()}
                                    </ul>
                                    <p class="order-total">
                                        "Total: "
                                        <strong>{view.total}</strong>
                                    </p>
                                    <div class="modal-actions">
                                        <button
                                            type="button"
                                            class="btn btn-secondary"
                                            on:click=move |_| details.set(None)
                                        >
                                            "Fechar"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    },
                )
        }}
    }
}

#[cfg(test)]
mod tests {
    use estoque::{
        admin::Admin,
        api::{ApiClient, HttpTransport},
        prices::DisplayLocale,
    };
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn selection_parses_product_ids() {
        assert_eq!(parse_selection("12"), Some(ProductId(12)));
        assert_eq!(parse_selection(""), None, "placeholder option selects nothing");
    }

    #[test]
    fn unselected_rows_show_the_placeholder() {
        let draft = OrderDraft::new();
        let values: Vec<String> = draft.rows().iter().map(selected_value).collect();

        assert_eq!(values, vec![String::new()]);
    }

    #[test]
    fn unit_price_follows_the_picked_product() {
        let console = Console::new(Admin::new(
            ApiClient::new(HttpTransport::new("http://localhost:8000/api")),
            DisplayLocale::default(),
        ));

        let option = ProductOption {
            id: ProductId(3),
            name: "Widget".to_string(),
            price: Decimal::new(5, 0),
            label: "Widget - R$ 5.00".to_string(),
        };

        let mut draft = OrderDraft::new();
        let row = draft.add_row();

        draft.select_product(row, Some(&option));

        let prices: Vec<String> = draft
            .rows()
            .iter()
            .map(|row| unit_price_text(console, Some(row)))
            .collect();

        assert_eq!(prices, vec![String::new(), "R$ 5.00".to_string()]);
        assert_eq!(unit_price_text(console, None), "", "no row shows no price");
    }
}
