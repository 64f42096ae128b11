//! Client List Component
//!
//! Client form above a paged, sortable client table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteButton, ErrorBanner, FormErrors, Pager, SortControls};
use crate::config::PAGE_SIZE;
use crate::context::{use_app_context, AppContext};
use crate::controller::{
    Action, FetchOutcome, FetchTicket, ListFormController, PageQuery, Sort, SortField, SortOrder,
};
use crate::models::Client;
use crate::validation::ClientDraft;

type ClientController = ListFormController<ClientDraft>;

/// Load the controller's current page and apply the result
fn fetch_clients(ctx: AppContext, ctrl: RwSignal<ClientController>, ticket: FetchTicket) {
    let Some(query) = ctrl.try_with_untracked(|c| c.query()) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let result = api.list_clients(&query).await;
        if let Some(FetchOutcome::Refetch(next)) = ctrl.try_update(|c| c.finish_fetch(ticket, result)) {
            fetch_clients(ctx, ctrl, next);
        }
    });
}

#[component]
pub fn ClientList() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = RwSignal::new(ClientController::new(PageQuery::sorted(PAGE_SIZE, Sort::default())));

    let reload = move |ticket: Option<FetchTicket>| {
        if let Some(ticket) = ticket {
            fetch_clients(ctx, ctrl, ticket);
        }
    };

    // Load clients on mount
    Effect::new(move |_| {
        reload(ctrl.try_update(|c| c.begin_fetch()).flatten());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(submission)) = ctrl.try_update(|c| c.begin_submit()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = match submission.action {
                Action::Update(id) => api
                    .update_client(id, &submission.draft.to_client(id))
                    .await
                    .map(|_| ()),
                _ => api
                    .create_client(&submission.draft.to_client(0))
                    .await
                    .map(|_| ()),
            };
            let saved = result.is_ok();
            let ticket = ctrl.try_update(|c| c.finish_submit(result)).flatten();
            if saved {
                ctx.notify_success(match submission.action {
                    Action::Update(_) => "Client updated successfully",
                    _ => "Client created successfully",
                });
            }
            reload(ticket);
        });
    };

    let delete_client = move |id: u32| {
        if ctrl.try_update(|c| c.begin_delete(id)) != Some(true) {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete_client(id).await;
            let deleted = result.is_ok();
            let ticket = ctrl.try_update(|c| c.finish_delete(result)).flatten();
            if deleted {
                ctx.notify_success("Client deleted successfully");
            }
            reload(ticket);
        });
    };

    let rows = Memo::new(move |_| ctrl.with(|c| c.items().to_vec()));
    let submitting = Signal::derive(move || ctrl.with(|c| c.phase().is_submitting()));
    let editing = move || ctrl.with(|c| c.phase().editing());

    view! {
        <div class="client-list">
            <form class="client-form" on:submit=on_submit>
                <h2>
                    {move || match editing() {
                        Some(id) => format!("Edit client #{}", id),
                        None => "New client".to_string(),
                    }}
                </h2>
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Enter name"
                        prop:value=move || ctrl.with(|c| c.draft().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctrl.update(|c| c.edit_draft(|d| d.name = value));
                        }
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        placeholder="Enter email"
                        prop:value=move || ctrl.with(|c| c.draft().email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctrl.update(|c| c.edit_draft(|d| d.email = value));
                        }
                    />
                </label>
                <label>
                    "Age"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || ctrl.with(|c| c.draft().age.to_string())
                        on:input=move |ev| {
                            let age = event_target_value(&ev).parse().unwrap_or(0);
                            ctrl.update(|c| c.edit_draft(|d| d.age = age));
                        }
                    />
                </label>
                <label>
                    "Account number"
                    <input
                        type="text"
                        placeholder="Enter account number"
                        prop:value=move || ctrl.with(|c| c.draft().account_number.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctrl.update(|c| c.edit_draft(|d| d.account_number = value));
                        }
                    />
                </label>

                <FormErrors violations=Signal::derive(move || ctrl.with(|c| c.violations().to_vec())) />

                <div class="form-actions">
                    <button
                        type="button"
                        class="clear-btn"
                        disabled=move || submitting.get()
                        on:click=move |_| {
                            ctrl.update(|c| {
                                c.clear_form();
                            });
                        }
                    >
                        "Clear"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || !ctrl.with(|c| c.can_submit())>
                        {move || if editing().is_some() { "Update" } else { "Submit" }}
                    </button>
                </div>
            </form>

            <ErrorBanner message=Signal::derive(move || ctrl.with(|c| c.error())) />

            <SortControls
                sort=Signal::derive(move || ctrl.with(|c| c.query().sort.unwrap_or_default()))
                disabled=submitting
                on_field=Callback::new(move |field: SortField| reload(ctrl.try_update(|c| c.set_sort_field(field)).flatten()))
                on_order=Callback::new(move |order: SortOrder| reload(ctrl.try_update(|c| c.set_sort_order(order)).flatten()))
            />

            <table class="table client-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Age"</th>
                        <th>"Account number"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|client| client_row(ctrl, client, delete_client)).collect_view()}
                </tbody>
            </table>
            <Show when=move || ctrl.with(|c| c.phase().is_loading())>
                <p class="loading" role="status">"Loading..."</p>
            </Show>

            <Pager
                page=Signal::derive(move || ctrl.with(|c| c.query().page))
                total_pages=Signal::derive(move || ctrl.with(|c| c.total_pages()))
                disabled=submitting
                on_select=Callback::new(move |page: u32| reload(ctrl.try_update(|c| c.set_page(page)).flatten()))
            />
        </div>
    }
}

fn client_row(
    ctrl: RwSignal<ClientController>,
    client: Client,
    delete_client: impl Fn(u32) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = client.id;
    view! {
        <tr class=move || if ctrl.with(|c| c.is_editing(id)) { "editing" } else { "" }>
            <td>{client.id}</td>
            <td>{client.name}</td>
            <td>{client.email}</td>
            <td>{client.age}</td>
            <td>{client.account_number}</td>
            <td class="row-actions">
                <button
                    type="button"
                    class="edit-btn"
                    disabled=move || ctrl.with(|c| c.phase().is_submitting() || c.is_deleting(id))
                    on:click=move |_| {
                        ctrl.update(|c| {
                            c.begin_edit(id);
                        });
                    }
                >
                    "Edit"
                </button>
                <DeleteButton
                    busy=Signal::derive(move || ctrl.with(|c| c.is_deleting(id)))
                    disabled=Signal::derive(move || !ctrl.with(|c| c.can_delete()))
                    on_confirm=Callback::new(move |_| delete_client(id))
                />
            </td>
        </tr>
    }
}
