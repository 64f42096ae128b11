//! Bank Admin App
//!
//! Provides the app context and maps paths to pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NoticeBanner;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{ClientsPage, ExtractsPage, LoginPage, NotFoundPage, TransactionsPage};
use crate::session::{BrowserTokenStore, Session};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::restore(BrowserTokenStore);
    log::info!(
        "app: starting against {} ({})",
        config.api_base_url,
        if session.is_authenticated() { "signed in" } else { "signed out" }
    );

    // Provide context to all children
    provide_context(AppContext::new(config, session));

    view! {
        <Router>
            <NoticeBanner />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=ClientsPage />
                <Route path=path!("/clients") view=ClientsPage />
                <Route path=path!("/transactions") view=TransactionsPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/extracts") view=ExtractsPage />
                <Route path=path!("/extracts/:client_id") view=ExtractsPage />
            </Routes>
        </Router>
    }
}
