//! Form Feedback Components
//!
//! Inline validation list, per-screen error banner, and the app-wide notice.

use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};
use crate::validation::Violation;

/// Every violated rule of the last submit attempt
#[component]
pub fn FormErrors(#[prop(into)] violations: Signal<Vec<Violation>>) -> impl IntoView {
    view! {
        <Show when=move || !violations.with(Vec::is_empty)>
            <ul class="form-errors" role="alert">
                {move || {
                    violations
                        .get()
                        .into_iter()
                        .map(|v| view! { <li data-field=v.field>{v.message}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

/// Last failed request on this screen
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <div class="alert alert-danger" role="alert" style="white-space: pre-line">{text}</div> }
        })
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.text}</span>
                    <button type="button" class="notice-close" on:click=move |_| ctx.dismiss_notice()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
