//! Public site header with auth-aware navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::claims::Role;
use crate::auth::session::{use_auth, use_auth_handle};
use crate::net::auth_api;
use crate::net::http::use_api_handle;

/// Top navigation for the public layout. Shows the role's panel link when
/// signed in, a sign-in link otherwise.
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    let panel_link = move || {
        state.get().role.and_then(|role| match role {
            Role::Coordinator => Some(("/coordinator", "Coordinator Panel")),
            Role::Manager => Some(("/manager", "Manager Panel")),
            Role::Admin => Some(("/admin", "Administration")),
            Role::RescueTeam | Role::TeamMember => Some(("/team", "My Missions")),
            Role::Citizen => None,
        })
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"FloodCoord"</a>
            <nav class="site-header__nav">
                <a href="/request">"Request Rescue"</a>
                <a href="/track">"Track Request"</a>
                {move || panel_link().map(|(href, label)| view! { <a href=href>{label}</a> })}
                {move || {
                    if state.get().authenticated {
                        view! { <LogoutButton/> }.into_any()
                    } else {
                        view! { <a href="/login">"Sign In"</a> }.into_any()
                    }
                }}
            </nav>
        </header>
    }
}

/// Logout control: best-effort server-side token invalidation, then the
/// local session drops and navigation goes to the login page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = use_auth_handle();
    let api = use_api_handle();
    let navigate = use_navigate();

    let on_click = move |_| {
        let auth = auth.get_value();
        let api = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            // The blacklist call needs the token, so it runs before the
            // local pair is cleared; its outcome does not gate logout.
            let _ = auth_api::logout(&api).await;
            auth.logout();
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <button class="btn btn--ghost" on:click=on_click>
            "Logout"
        </button>
    }
}
