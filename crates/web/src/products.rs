use estoque::{notifications::Confirmation, products::ProductForm, views::products::ProductRow};
use leptos::prelude::*;

use crate::console::Console;

const NO_PRODUCTS: &str = "Nenhum produto cadastrado";

fn product_row(console: Console, row: ProductRow) -> impl IntoView {
    let id = row.id;

    view! {
        <tr>
            <td>{row.id.to_string()}</td>
            <td>{row.name}</td>
            <td>{row.description}</td>
            <td class="amount">{row.price_text}</td>
            <td class="amount">{row.quantity}</td>
            <td>
                <span class=format!("badge badge-{}", row.tone.class())>{row.label}</span>
            </td>
            <td class="actions">
                <button
                    type="button"
                    class="btn btn-small"
                    on:click=move |_| console.open_product_form(Some(id))
                >
                    "Editar"
                </button>
                <button
                    type="button"
                    class="btn btn-small btn-danger"
                    on:click=move |_| {
                        console.screens.confirmation.set(Some(Confirmation::DeleteProduct(id)));
                    }
                >
                    "Excluir"
                </button>
            </td>
        </tr>
    }
}

/// Product catalog section.
#[component]
pub(crate) fn ProductsPanel(console: Console) -> impl IntoView {
    let products = console.screens.products;

    view! {
        <div class="section-header">
            <h2>"Produtos"</h2>
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| console.open_product_form(None)
            >
                "Novo Produto"
            </button>
        </div>
        <table class="table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nome"</th>
                    <th>"Descrição"</th>
                    <th>"Preço"</th>
                    <th>"Estoque"</th>
                    <th>"Status"</th>
                    <th>"Ações"</th>
                </tr>
            </thead>
            <tbody>
                {move || match products.get() {
                    Some(view) if !view.is_empty() => view
                        .rows
                        .into_iter()
                        .map(|row| product_row(console, row))
                        .collect_view()
                        .into_any(),
                    Some(_) => view! {
                        <tr><td colspan="7" class="text-muted">{NO_PRODUCTS}</td></tr>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </tbody>
        </table>
    }
}

/// Edit one field of the open form.
fn edit(
    form: RwSignal<Option<ProductForm>>,
    apply: impl Fn(&mut ProductForm, String),
) -> impl Fn(leptos::ev::Event) {
    move |event| {
        let value = event_target_value(&event);

        form.update(|form| {
            if let Some(form) = form {
                apply(form, value);
            }
        });
    }
}

/// Create/edit form for a single product.
#[component]
pub(crate) fn ProductFormModal(console: Console) -> impl IntoView {
    let form = console.screens.product_form;

    let field = move |read: fn(&ProductForm) -> String| {
        move || form.with(|form| form.as_ref().map(read).unwrap_or_default())
    };

    view! {
        <Show when=move || form.with(Option::is_some)>
            <div class="modal-backdrop">
                <form
                    class="modal"
                    on:submit=move |event| {
                        event.prevent_default();
                        console.save_product();
                    }
                >
                    <h3>{move || form.with(|form| form.as_ref().map_or("", ProductForm::title))}</h3>
                    <label>
                        "Nome"
                        <input
                            type="text"
                            required
                            prop:value=field(|form| form.name.clone())
                            on:input=edit(form, |form, value| form.name = value)
                        />
                    </label>
                    <label>
                        "Descrição"
                        <textarea
                            prop:value=field(|form| form.description.clone())
                            on:input=edit(form, |form, value| form.description = value)
                        />
                    </label>
                    <label>
                        "Preço"
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            required
                            prop:value=field(|form| form.price.clone())
                            on:input=edit(form, |form, value| form.price = value)
                        />
                    </label>
                    <label>
                        "Quantidade"
                        <input
                            type="number"
                            min="0"
                            required
                            prop:value=field(|form| form.quantity.clone())
                            on:input=edit(form, |form, value| form.quantity = value)
                        />
                    </label>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| form.set(None)
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            "Salvar"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
