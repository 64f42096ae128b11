//! Route Gate Component
//!
//! Renders a page or redirects, depending on the session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_app_context;
use crate::routes::{decide, Access, AppRoute};

#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    move || match decide(route, ctx.is_authenticated()) {
        Access::Render => children().into_any(),
        Access::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
