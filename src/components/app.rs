use yew::prelude::*;

use crate::hooks::{use_seller_context, SellerContextProvider};
use crate::stores::SlotStatus;
use crate::utils::format_currency;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SellerContextProvider>
            <DashboardShell />
        </SellerContextProvider>
    }
}

/// Cáscara mínima del panel: resume los slots del store y permite
/// refrescarlos. Las páginas reales consumen el mismo handle.
#[function_component(DashboardShell)]
fn dashboard_shell() -> Html {
    let seller = use_seller_context();
    let store = &seller.store;

    let on_refresh_products = {
        let fetch = seller.fetch_products.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };
    let on_refresh_orders = {
        let fetch = seller.fetch_orders.clone();
        Callback::from(move |_: MouseEvent| fetch.emit(()))
    };
    let on_logout = {
        let clear = seller.clear_session.clone();
        Callback::from(move |_: MouseEvent| clear.emit(()))
    };

    let products = store.products.data().map(|p| p.len()).unwrap_or(0);
    let orders = store.orders.data().map(|o| o.len()).unwrap_or(0);
    let revenue = store
        .revenue
        .data()
        .map(|r| format_currency(r.month))
        .unwrap_or_else(|| "—".to_string());

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{ "Seller Hub" }</h1>
                {
                    if store.has_session() {
                        html! { <button onclick={on_logout}>{ "Cerrar sesión" }</button> }
                    } else {
                        html! { <span class="badge">{ "Sin sesión" }</span> }
                    }
                }
            </header>
            <section class="dashboard-cards">
                <div class="card">
                    <h2>{ "Productos" }</h2>
                    <p class="value">{ products }</p>
                    { staleness_badge(store.products.status()) }
                    <button onclick={on_refresh_products}>{ "Refrescar" }</button>
                </div>
                <div class="card">
                    <h2>{ "Pedidos" }</h2>
                    <p class="value">{ orders }</p>
                    { staleness_badge(store.orders.status()) }
                    <button onclick={on_refresh_orders}>{ "Refrescar" }</button>
                </div>
                <div class="card">
                    <h2>{ "Ingresos del mes" }</h2>
                    <p class="value">{ revenue }</p>
                    { staleness_badge(store.revenue.status()) }
                </div>
            </section>
        </div>
    }
}

fn staleness_badge(status: SlotStatus) -> Html {
    match status {
        SlotStatus::Unloaded => html! { <span class="badge badge-muted">{ "Sin cargar" }</span> },
        SlotStatus::Loaded => html! {},
        SlotStatus::StaleOnError => html! {
            <span class="badge badge-warn">{ "Dato posiblemente obsoleto" }</span>
        },
    }
}
