//! Password reset redemption page, reached from the emailed link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::header::Header;
use crate::net::auth_api;
use crate::net::http::use_api_handle;
use crate::net::types::ResetPasswordRequest;

/// New-password form; the reset token arrives in the `token` query param.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = use_api_handle();
    let navigate = use_navigate();
    let query = use_query_map();

    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(token) = query.with_untracked(|q| q.get("token")) else {
            error.set(Some("This reset link is missing its token; request a new one".to_owned()));
            return;
        };
        if new_password.get_untracked() != confirm_password.get_untracked() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = ResetPasswordRequest { token, new_password: new_password.get_untracked() };
            match auth_api::reset_password(&api, &request).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="page">
            <Header/>
            <main class="auth-page">
                <form class="auth-form" on:submit=on_submit>
                    <h2>"Reset password"</h2>
                    <p class="auth-form__hint">"Enter your new password below"</p>

                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                    <label class="auth-form__label">
                        "New password"
                        <input
                            type="password"
                            required
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Resetting..." } else { "Reset password" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
