//! Citizen account registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::auth_api;
use crate::net::http::use_api_handle;
use crate::net::types::RegisterRequest;
use crate::util::validate;

/// Registration form; successful sign-up routes to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api_handle();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm_password.get_untracked() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        if !validate::is_valid_phone(&phone_number.get_untracked()) {
            error.set(Some("Phone number must be 0 or +84 followed by nine digits".to_owned()));
            return;
        }
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = RegisterRequest {
                full_name: full_name.get_untracked(),
                email: email.get_untracked(),
                phone_number: phone_number.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            };
            match auth_api::register(&api, &request).await {
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
                    <h2>"Create an account"</h2>

                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            type="text"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Phone Number"
                        <input
                            type="tel"
                            required
                            placeholder="0912345678"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
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
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            type="password"
                            required
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
                    </button>

                    <p class="auth-form__hint">
                        "Already registered? " <a href="/login">"Sign in"</a>
                    </p>
                </form>
            </main>
        </div>
    }
}
