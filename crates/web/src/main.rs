//! Estoque browser console

use estoque::{
    admin::Admin,
    api::{ApiClient, HttpTransport},
    navigation::Section,
    prices::DisplayLocale,
};
use leptos::prelude::*;

mod console;
mod dashboard;
mod notices;
mod orders;
mod products;
mod stock;

use console::Console;

/// Backend used when the page origin cannot be read.
const FALLBACK_API_URL: &str = "http://localhost:8000/api";

/// The backend is served from the page's origin under `/api`.
fn api_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map_or_else(|| FALLBACK_API_URL.to_string(), |origin| format!("{origin}/api"))
}

#[component]
fn Navigation(console: Console) -> impl IntoView {
    let navigator = console.screens.navigator;

    view! {
        <nav class="nav">
            <h1 class="nav-brand">"Gestão de Estoque"</h1>
            <ul class="nav-links">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{}", section.slug())
                                    class=move || {
                                        if navigator.with(|navigator| navigator.is_visible(section)) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |event| {
                                        event.prevent_default();
                                        console.navigate(section);
                                    }
                                >
                                    {section.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Main console shell.
#[component]
fn App() -> impl IntoView {
    let admin = Admin::new(
        ApiClient::new(HttpTransport::new(api_base_url())),
        DisplayLocale::default(),
    );

    let console = Console::new(admin);
    let navigator = console.screens.navigator;

    console.load(Section::Dashboard);

    let section_class = move |section: Section| {
        move || {
            if navigator.with(|navigator| navigator.is_visible(section)) {
                "section"
            } else {
                "section hidden"
            }
        }
    };

    view! {
        <Navigation console=console />
        <notices::NoticeArea console=console />
        <main class="container">
            <section id="dashboard" class=section_class(Section::Dashboard)>
                <dashboard::DashboardPanel console=console />
            </section>
            <section id="produtos" class=section_class(Section::Products)>
                <products::ProductsPanel console=console />
            </section>
            <section id="pedidos" class=section_class(Section::Orders)>
                <orders::OrdersPanel console=console />
            </section>
            <section id="estoque" class=section_class(Section::Stock)>
                <stock::StockPanel console=console />
            </section>
        </main>
        <products::ProductFormModal console=console />
        <orders::OrderBuilderModal console=console />
        <orders::OrderDetailsModal console=console />
        <notices::ConfirmDialog console=console />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
