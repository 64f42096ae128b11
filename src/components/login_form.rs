//! Login Form Component
//!
//! Username/password form. A successful login stores the token in the
//! session; the login route's gate then moves on to the extracts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::LoginRequest;
use crate::validation::LoginDraft;

fn login_failure_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Decode(_) => "Login failed.",
        _ => "Incorrect username or password.",
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let (draft, set_draft) = signal(LoginDraft::default());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        let current = draft.get_untracked();
        let violations = current.validate();
        if !violations.is_empty() {
            let lines: Vec<&str> = violations.iter().map(|v| v.message).collect();
            set_error.set(Some(lines.join("\n")));
            return;
        }

        set_pending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            let request = LoginRequest {
                user_name: current.username.trim().to_string(),
                password: current.password,
            };
            match api.login(&request).await {
                Ok(token) => ctx.sign_in(token),
                Err(e) => {
                    log::warn!("login: {}", e);
                    set_error.set(Some(login_failure_message(&e).to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    let can_submit = move || !pending.get() && draft.with(|d| d.validate().is_empty());

    view! {
        <div class="login-page">
            <h2>"Login"</h2>
            {move || error.get().map(|text| view! { <div class="alert alert-danger" role="alert" style="white-space: pre-line">{text}</div> })}
            <form class="login-form" on:submit=on_submit>
                <label>
                    "Username"
                    <input
                        type="text"
                        placeholder="Enter username"
                        autocomplete="username"
                        prop:value=move || draft.with(|d| d.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.username = value);
                        }
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        placeholder="Enter password"
                        autocomplete="current-password"
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.password = value);
                        }
                    />
                </label>
                <button type="submit" class="submit-btn" disabled=move || !can_submit()>
                    "Login"
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_messages() {
        assert_eq!(
            login_failure_message(&ApiError::Status { status: 401, body: None }),
            "Incorrect username or password."
        );
        assert_eq!(
            login_failure_message(&ApiError::Decode("no token".into())),
            "Login failed."
        );
    }
}
