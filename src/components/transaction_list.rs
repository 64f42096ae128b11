//! Transaction List Component
//!
//! Transaction form above a paged transaction table. Transactions are
//! created and deleted, never edited.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteButton, ErrorBanner, FormErrors, Pager};
use crate::config::PAGE_SIZE;
use crate::context::{use_app_context, AppContext};
use crate::controller::{FetchOutcome, FetchTicket, ListFormController, PageQuery};
use crate::error::ApiError;
use crate::models::{Transaction, TransactionType};
use crate::validation::TransactionDraft;

type TransactionController = ListFormController<TransactionDraft>;

fn fetch_transactions(ctx: AppContext, ctrl: RwSignal<TransactionController>, ticket: FetchTicket) {
    let Some(query) = ctrl.try_with_untracked(|c| c.query()) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let result = api.list_transactions(&query).await;
        if let Some(FetchOutcome::Refetch(next)) = ctrl.try_update(|c| c.finish_fetch(ticket, result)) {
            fetch_transactions(ctx, ctrl, next);
        }
    });
}

/// Local clock, ISO-8601
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[component]
pub fn TransactionList() -> impl IntoView {
    let ctx = use_app_context();
    let ctrl = RwSignal::new(TransactionController::new(PageQuery::new(PAGE_SIZE)));

    let reload = move |ticket: Option<FetchTicket>| {
        if let Some(ticket) = ticket {
            fetch_transactions(ctx, ctrl, ticket);
        }
    };

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
            let result = match submission.draft.to_new_transaction(now_iso()) {
                Some(body) => api.create_transaction(&body).await.map(|_| ()),
                None => Err(ApiError::Encode(format!(
                    "cannot build transaction from type {:?} and amount {:?}",
                    submission.draft.kind, submission.draft.amount
                ))),
            };
            let created = result.is_ok();
            let ticket = ctrl.try_update(|c| c.finish_submit(result)).flatten();
            if created {
                ctx.notify_success("Transaction created successfully");
            }
            reload(ticket);
        });
    };

    let delete_transaction = move |id: u32| {
        if ctrl.try_update(|c| c.begin_delete(id)) != Some(true) {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete_transaction(id).await;
            let deleted = result.is_ok();
            let ticket = ctrl.try_update(|c| c.finish_delete(result)).flatten();
            if deleted {
                ctx.notify_success("Transaction deleted successfully");
            }
            reload(ticket);
        });
    };

    let rows = Memo::new(move |_| ctrl.with(|c| c.items().to_vec()));
    let submitting = Signal::derive(move || ctrl.with(|c| c.phase().is_submitting()));

    view! {
        <div class="transaction-list">
            <form class="transaction-form" on:submit=on_submit>
                <label>
                    "Client id"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || ctrl.with(|c| c.draft().client_id.to_string())
                        on:input=move |ev| {
                            let client_id = event_target_value(&ev).parse().unwrap_or(0);
                            ctrl.update(|c| c.edit_draft(|d| d.client_id = client_id));
                        }
                    />
                </label>
                <label>
                    "Type"
                    <input
                        type="text"
                        list="transaction-types"
                        placeholder="debit or credit"
                        prop:value=move || ctrl.with(|c| c.draft().kind.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctrl.update(|c| c.edit_draft(|d| d.kind = value));
                        }
                    />
                    <datalist id="transaction-types">
                        <option value=TransactionType::Debit.as_str()></option>
                        <option value=TransactionType::Credit.as_str()></option>
                    </datalist>
                </label>
                <label>
                    "Amount"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        prop:value=move || ctrl.with(|c| c.draft().amount.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctrl.update(|c| c.edit_draft(|d| d.amount = value));
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
                        "Submit"
                    </button>
                </div>
            </form>

            <ErrorBanner message=Signal::derive(move || ctrl.with(|c| c.error())) />

            <table class="table transaction-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Client Id"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|tx| transaction_row(ctrl, tx, delete_transaction))
                            .collect_view()
                    }}
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

fn transaction_row(
    ctrl: RwSignal<TransactionController>,
    tx: Transaction,
    delete_transaction: impl Fn(u32) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = tx.id;
    view! {
        <tr>
            <td>{tx.id}</td>
            <td>{tx.client_id}</td>
            <td>{tx.kind.as_str()}</td>
            <td>{format!("{:.2}", tx.amount)}</td>
            <td>{tx.transaction_date}</td>
            <td class="row-actions">
                <DeleteButton
                    busy=Signal::derive(move || ctrl.with(|c| c.is_deleting(id)))
                    disabled=Signal::derive(move || !ctrl.with(|c| c.can_delete()))
                    on_confirm=Callback::new(move |_| delete_transaction(id))
                />
            </td>
        </tr>
    }
}
