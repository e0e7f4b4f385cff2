//! Email/password sign-in page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::use_auth_handle;
use crate::components::header::Header;
use crate::net::auth_api;
use crate::net::http::use_api_handle;
use crate::net::types::LoginRequest;

/// Sign-in form. On success the session context updates synchronously and
/// navigation goes to the landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_handle();
    let api = use_api_handle();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let auth = auth.get_value();
        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match auth_api::login(&api, &request).await {
                Ok(pair) => {
                    auth.login(&pair.access_token, pair.refresh_token.as_deref().unwrap_or_default());
                    navigate("/", NavigateOptions::default());
                }
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
                    <h2>"Sign in"</h2>
                    <p class="auth-form__hint">"Welcome back! Please sign in to continue"</p>

                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                    <label class="auth-form__label">
                        "Email"
                        <input
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="auth-form__row">
                        <a href="/forgot-password">"Forgot password?"</a>
                    </div>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>

                    <p class="auth-form__hint">
                        "Don't have an account? " <a href="/register">"Sign up"</a>
                    </p>
                </form>
            </main>
        </div>
    }
}
