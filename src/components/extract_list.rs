//! Extract List Component
//!
//! Client-id lookup showing that client's transactions and running total.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::controller::{ExtractQuery, ExtractView, FetchTicket};
use crate::models::Extract;

fn fetch_extract(ctx: AppContext, query: RwSignal<ExtractQuery>, ticket: FetchTicket) {
    let Some(client_id) = query.try_with_untracked(|q| q.client_id()) else {
        return;
    };
    let api = ctx.api();
    spawn_local(async move {
        let result = api.get_extract(client_id).await;
        query.try_update(|q| q.finish_query(ticket, result));
    });
}

/// `client_id` is the id embedded in the URL, if any; it is looked up right away
#[component]
pub fn ExtractList(client_id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let query = RwSignal::new(ExtractQuery::new(client_id));

    Effect::new(move |_| {
        if let Some(ticket) = query.try_update(|q| q.begin_query()).flatten() {
            fetch_extract(ctx, query, ticket);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(ticket) = query.try_update(|q| q.begin_query()).flatten() {
            fetch_extract(ctx, query, ticket);
        }
    };

    view! {
        <div class="extract-list">
            <form class="extract-form" on:submit=on_submit>
                <label>
                    "Client id"
                    <input
                        type="number"
                        min="0"
                        placeholder="Enter client id"
                        prop:value=move || query.with(|q| q.client_id().to_string())
                        on:input=move |ev| {
                            let client_id = event_target_value(&ev).parse().unwrap_or(0);
                            query.update(|q| q.set_client_id(client_id));
                        }
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="clear-btn" on:click=move |_| query.update(|q| q.clear())>
                        "Clear"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || !query.with(|q| q.can_submit())>
                        "Submit"
                    </button>
                </div>
            </form>

            {move || match query.with(|q| q.view().clone()) {
                ExtractView::Idle => ().into_any(),
                ExtractView::Loading => {
                    view! { <p class="loading" role="status">"Loading..."</p> }.into_any()
                }
                ExtractView::NoTransactions => {
                    view! {
                        <div class="alert alert-warning" role="status">
                            "No transactions found for the given client ID."
                        </div>
                    }
                    .into_any()
                }
                ExtractView::Loaded(extract) => extract_table(extract).into_any(),
            }}
        </div>
    }
}

fn extract_table(extract: Extract) -> impl IntoView {
    view! {
        <table class="table extract-table">
            <thead>
                <tr>
                    <th>"Id"</th>
                    <th>"Client Id"</th>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {extract
                    .transactions
                    .into_iter()
                    .map(|tx| {
                        view! {
                            <tr>
                                <td>{tx.id}</td>
                                <td>{tx.client_id}</td>
                                <td>{tx.kind.as_str()}</td>
                                <td>{format!("{:.2}", tx.amount)}</td>
                                <td>{tx.transaction_date}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
        <p class="extract-total">{format!("Total: {:.2}", extract.total)}</p>
    }
}
