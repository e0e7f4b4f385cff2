//! Password reset request page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::net::auth_api;
use crate::net::http::use_api_handle;

/// Email entry for a password reset link. The backend answers generically
/// whether or not the account exists, and so does this page.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = use_api_handle();

    let email = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match auth_api::forgot_password(&api, &email.get_untracked()).await {
                Ok(()) => sent.set(true),
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
                    <h2>"Forgot password"</h2>

                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                    {move || {
                        sent.get()
                            .then(|| {
                                view! {
                                    <div class="form-notice">
                                        "If an account with this email exists, a password reset link has been sent."
                                    </div>
                                }
                            })
                    }}

                    <label class="auth-form__label">
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Sending..." } else { "Send reset link" }}
                    </button>

                    <p class="auth-form__hint">
                        <a href="/login">"Back to sign in"</a>
                    </p>
                </form>
            </main>
        </div>
    }
}
