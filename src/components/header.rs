//! Header Component
//!
//! Top navigation between the three sections, plus sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::use_app_context;
use crate::routes::{AppRoute, Section};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::resolve(&location.pathname.get()).section());

    view! {
        <header class="header">
            <nav class="header-menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let tab_class = move || {
                            if current.get() == Some(section) {
                                "header-menu-item selected"
                            } else {
                                "header-menu-item"
                            }
                        };
                        view! {
                            <a href=section.path() class=tab_class>
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <Show when=move || ctx.is_authenticated()>
                <button type="button" class="sign-out-btn" on:click=move |_| ctx.sign_out()>
                    "Sign out"
                </button>
            </Show>
        </header>
    }
}
