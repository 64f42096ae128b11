//! Page Shells
//!
//! Header plus one screen each.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{ClientList, ExtractList, Header, LoginForm, RouteGate, TransactionList};
use crate::routes::{parse_client_id, AppRoute};

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <div class="page client-page">
            <Header />
            <main class="page-content">
                <ClientList />
            </main>
        </div>
    }
}

#[component]
pub fn TransactionsPage() -> impl IntoView {
    view! {
        <div class="page transactions-page">
            <Header />
            <main class="page-content">
                <TransactionList />
            </main>
        </div>
    }
}

/// Serves both `/extracts` and `/extracts/:client_id`
#[component]
pub fn ExtractsPage() -> impl IntoView {
    let params = use_params_map();
    let client_id = Memo::new(move |_| {
        params.with(|p| p.get("client_id")).as_deref().and_then(parse_client_id)
    });

    view! {
        <div class="page extracts-page">
            <Header />
            <main class="page-content">
                {move || {
                    let client_id = client_id.get();
                    view! {
                        <RouteGate route=AppRoute::Extracts { client_id }>
                            <ExtractList client_id=client_id />
                        </RouteGate>
                    }
                }}
            </main>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="page login-page">
            <Header />
            <main class="page-content">
                <RouteGate route=AppRoute::Login>
                    <LoginForm />
                </RouteGate>
            </main>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page error-page">
            <Header />
            <main class="page-content">
                <h1>"Error 404"</h1>
                <p>"page not found"</p>
            </main>
        </div>
    }
}
