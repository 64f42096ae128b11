//! Pager and Sort Controls
//!
//! Page buttons follow the server-reported page count.

use leptos::prelude::*;

use crate::controller::{Sort, SortField, SortOrder};

fn has_previous(page: u32) -> bool {
    page > 0
}

/// `total_pages` is what the server reported
fn has_next(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pager">
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || { disabled.get() || !has_previous(page.get()) }
                    on:click=move |_| on_select.run(page.get().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    (0..total_pages.get())
                        .map(|p| {
                            view! {
                                <button
                                    type="button"
                                    class=move || if page.get() == p { "page-btn active" } else { "page-btn" }
                                    disabled=move || disabled.get()
                                    on:click=move |_| on_select.run(p)
                                >
                                    {p + 1}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || { disabled.get() || !has_next(page.get(), total_pages.get()) }
                    on:click=move |_| on_select.run(page.get() + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}

#[component]
pub fn SortControls(
    #[prop(into)] sort: Signal<Sort>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_field: Callback<SortField>,
    #[prop(into)] on_order: Callback<SortOrder>,
) -> impl IntoView {
    view! {
        <div class="sort-controls">
            <label>
                "Sort by "
                <select
                    prop:value=move || sort.get().field.as_str()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if let Some(field) = SortField::parse(&event_target_value(&ev)) {
                            on_field.run(field);
                        }
                    }
                >
                    {SortField::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>
            <select
                prop:value=move || sort.get().order.as_str()
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(order) = SortOrder::parse(&event_target_value(&ev)) {
                        on_order.run(order);
                    }
                }
            >
                <option value="asc">"asc"</option>
                <option value="desc">"desc"</option>
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_step_bounds() {
        assert!(!has_previous(0));
        assert!(has_previous(1));

        assert!(has_next(0, 2));
        assert!(!has_next(1, 2));
        assert!(!has_next(0, 0));
        assert!(!has_next(4, 3));
    }
}
