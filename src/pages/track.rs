//! Public tracking lookup by code.

use leptos::prelude::*;

use crate::components::badges::StatusBadge;
use crate::components::header::Header;
use crate::net::http::use_api_handle;
use crate::net::rescue_api;
use crate::net::types::{RequestStatus, TrackedRequest};
use crate::util::format;

/// Tracking-code lookup with the citizen-facing view of the request.
#[component]
pub fn TrackPage() -> impl IntoView {
    let api = use_api_handle();

    let code = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let found = RwSignal::new(None::<TrackedRequest>);

    // Completion confirmation, offered once a rescue is COMPLETED.
    let rating = RwSignal::new(5u8);
    let feedback = RwSignal::new(String::new());
    let confirming = RwSignal::new(false);
    let confirmed = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let trimmed = code.get_untracked().trim().to_owned();
        if trimmed.is_empty() {
            error.set(Some("Enter the tracking code from your submission".to_owned()));
            return;
        }
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);
        found.set(None);
        confirmed.set(false);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match rescue_api::track(&api, &trimmed).await {
                Ok(request) => found.set(Some(request)),
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="page">
            <Header/>
            <main class="track-page">
                <h1>"Track a Rescue Request"</h1>
                <form class="track-page__form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Tracking code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Searching..." } else { "Search" }}
                    </button>
                </form>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                {move || {
                    found
                        .get()
                        .map(|request| {
                            view! {
                                <div class="track-result">
                                    <div class="track-result__header">
                                        <h2>{request.title.clone()}</h2>
                                        <StatusBadge status=request.status/>
                                    </div>
                                    <p class="track-result__code">{format!("Code: {}", request.tracking_code)}</p>
                                    {request.description.clone().map(|text| view! { <p>{text}</p> })}
                                    {request
                                        .assigned_team_name
                                        .clone()
                                        .map(|team| {
                                            let phone = request
                                                .assigned_team_phone
                                                .clone()
                                                .unwrap_or_else(|| "-".to_owned());
                                            view! {
                                                <p class="track-result__team">
                                                    {format!("Assigned team: {team} (contact {phone})")}
                                                </p>
                                            }
                                        })}
                                    {request
                                        .coordinator_note
                                        .clone()
                                        .map(|note| view! { <p class="track-result__note">{note}</p> })}
                                    <p class="track-result__meta">
                                        {format!(
                                            "Submitted {} | Completed {}",
                                            format::timestamp(request.created_at),
                                            format::timestamp(request.completed_at),
                                        )}
                                    </p>
                                    {(request.status == RequestStatus::Completed)
                                        .then(|| {
                                            let request_id = request.id;
                                            let tracking_code = request.tracking_code.clone();
                                            let on_confirm = move |ev: leptos::ev::SubmitEvent| {
                                                ev.prevent_default();
                                                if confirming.get_untracked() {
                                                    return;
                                                }
                                                confirming.set(true);
                                                let api = api.get_value();
                                                let tracking_code = tracking_code.clone();
                                                leptos::task::spawn_local(async move {
                                                    match rescue_api::confirm_completion(
                                                        &api,
                                                        request_id,
                                                        &tracking_code,
                                                        &feedback.get_untracked(),
                                                        rating.get_untracked(),
                                                    )
                                                    .await
                                                    {
                                                        Ok(()) => confirmed.set(true),
                                                        Err(err) => error.set(Some(err.to_string())),
                                                    }
                                                    confirming.set(false);
                                                });
                                            };
                                            view! {
                                                <Show
                                                    when=move || !confirmed.get()
                                                    fallback=|| {
                                                        view! {
                                                            <div class="form-notice">
                                                                "Thank you for confirming the rescue."
                                                            </div>
                                                        }
                                                    }
                                                >
                                                    <form class="track-result__confirm" on:submit=on_confirm.clone()>
                                                        <h3>"Confirm the rescue"</h3>
                                                        <label class="dialog__label">
                                                            "Rating"
                                                            <select
                                                                class="dialog__input"
                                                                on:change=move |ev| {
                                                                    if let Ok(value) = event_target_value(&ev).parse() {
                                                                        rating.set(value);
                                                                    }
                                                                }
                                                            >
                                                                {(1u8..=5)
                                                                    .rev()
                                                                    .map(|stars| {
                                                                        view! {
                                                                            <option
                                                                                value=stars.to_string()
                                                                                selected=move || rating.get() == stars
                                                                            >
                                                                                {format!("{stars} / 5")}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect::<Vec<_>>()}
                                                            </select>
                                                        </label>
                                                        <label class="dialog__label">
                                                            "Feedback"
                                                            <textarea
                                                                class="dialog__input"
                                                                prop:value=move || feedback.get()
                                                                on:input=move |ev| feedback.set(event_target_value(&ev))
                                                            ></textarea>
                                                        </label>
                                                        <button
                                                            type="submit"
                                                            class="btn btn--primary"
                                                            disabled=move || confirming.get()
                                                        >
                                                            {move || {
                                                                if confirming.get() { "Confirming..." } else { "Confirm" }
                                                            }}
                                                        </button>
                                                    </form>
                                                </Show>
                                            }
                                        })}
                                </div>
                            }
                        })
                }}
            </main>
        </div>
    }
}
