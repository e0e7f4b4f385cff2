//! Rescue team panel: mission progress reporting.

use leptos::prelude::*;
use uuid::Uuid;

use crate::auth::session::use_auth;
use crate::components::panel_layout::PanelLayout;
use crate::net::http::use_api_handle;
use crate::net::mission_api;
use crate::net::types::{RequestStatus, UpdateProgress};

/// Field reporting for an assigned mission: pick the phase, add a note
/// the coordinator and the citizen both see.
#[component]
pub fn TeamDashboardPage() -> impl IntoView {
    let api = use_api_handle();
    let state = use_auth().state();

    let request_id = RwSignal::new(String::new());
    let status = RwSignal::new(RequestStatus::Moving);
    let note = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reported = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Ok(id) = request_id.get_untracked().trim().parse::<Uuid>() else {
            error.set(Some("Enter the mission's request id from your assignment".to_owned()));
            return;
        };
        pending.set(true);
        error.set(None);
        reported.set(false);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let body = UpdateProgress { status: status.get_untracked(), note: note.get_untracked() };
            match mission_api::update_progress(&api, id, &body).await {
                Ok(()) => {
                    reported.set(true);
                    note.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    let greeting = move || {
        state
            .get()
            .user
            .and_then(|user| user.email)
            .map_or_else(|| "Welcome!".to_owned(), |email| format!("Welcome, {email}!"))
    };

    view! {
        <PanelLayout title="Rescue Team Dashboard" subtitle="Field Panel" nav=vec![("/team", "My Missions")]>
            <p class="panel__lede">{greeting}</p>

            <form class="mission-form" on:submit=on_submit>
                <h2 class="panel__section">"Report Mission Progress"</h2>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                {move || {
                    reported
                        .get()
                        .then(|| view! { <div class="form-notice">"Progress reported."</div> })
                }}

                <label class="dialog__label">
                    "Request Id"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="6f9619ff-8b86-d011-b42d-00c04fc964ff"
                        prop:value=move || request_id.get()
                        on:input=move |ev| request_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Phase"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(parsed) = RequestStatus::from_code(&event_target_value(&ev)) {
                                status.set(parsed);
                            }
                        }
                    >
                        {RequestStatus::MISSION_PROGRESS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.as_str() selected=move || status.get() == option>
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Field Note"
                    <textarea
                        class="dialog__input"
                        placeholder="Road flooded, moving slowly"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Reporting..." } else { "Report" }}
                </button>
            </form>
        </PanelLayout>
    }
}
