//! Delete Button Component
//!
//! Inline delete confirmation button with a busy state.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons.
/// While `busy` the row shows a spinner label instead; while `disabled` every
/// control is inert.
///
/// # Arguments
/// * `busy` - This row's deletion is in flight
/// * `disabled` - Some deletion (or other write) is in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteButton(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show
            when=move || !busy.get()
            fallback=|| view! { <span class="delete-busy" role="status">"Deleting..."</span> }
        >
            <Show when=move || !confirm_delete.get()>
                <button
                    type="button"
                    class="delete-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(true);
                    }
                >
                    "Delete"
                </button>
            </Show>
            <Show when=move || confirm_delete.get()>
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        type="button"
                        class="confirm-btn"
                        disabled=move || disabled.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirm_delete.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            </Show>
        </Show>
    }
}
