//! Validation dialog for pending rescue requests.

use leptos::prelude::*;

use crate::net::coordinator_api;
use crate::net::http::use_api_handle;
use crate::net::types::{EmergencyLevel, RequestSummary, VerifyRequest};

/// Coordinator review of a PENDING request: adjust the emergency level,
/// attach a note, approve. On success the request moves to VERIFIED and
/// `on_done` fires so the caller can refetch.
#[component]
pub fn VerifyModal(
    request: RequestSummary,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let api = use_api_handle();
    let request_id = request.request_id;

    // Full detail for the review pane; the summary row alone lacks the
    // description, reporter, and location.
    let detail = LocalResource::new(move || {
        let api = api.get_value();
        async move { coordinator_api::request_detail(&api, request_id).await }
    });

    let level = RwSignal::new(match request.emergency_level {
        EmergencyLevel::Normal => EmergencyLevel::Medium,
        other => other,
    });
    let note = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let body = VerifyRequest { emergency_level: level.get_untracked(), note: note.get_untracked() };
            match coordinator_api::verify_request(&api, request_id, &body).await {
                Ok(()) => {
                    on_done.run(());
                    on_close.run(());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Validate Request"</h2>
                <p class="dialog__hint">{format!("Review and approve \"{}\"", request.title)}</p>

                <Suspense fallback=move || view! { <p class="dialog__hint">"Loading details..."</p> }>
                    {move || {
                        detail
                            .get()
                            .map(|result| match result {
                                Ok(detail) => {
                                    let where_from = detail.location.as_ref().map_or_else(
                                        String::new,
                                        |loc| format!(" | at {:.4}, {:.4}", loc.latitude, loc.longitude),
                                    );
                                    view! {
                                        <div class="dialog__detail">
                                            {detail.description.clone().map(|text| view! { <p>{text}</p> })}
                                            <p class="dialog__hint">
                                                {format!(
                                                    "{} people | reported by {}{}",
                                                    detail.people_count,
                                                    detail
                                                        .citizen_name
                                                        .clone()
                                                        .unwrap_or_else(|| "anonymous".to_owned()),
                                                    where_from,
                                                )}
                                            </p>
                                            {(!detail.media.is_empty())
                                                .then(|| {
                                                    view! {
                                                        <p class="dialog__hint">
                                                            {format!("{} media attachments", detail.media.len())}
                                                        </p>
                                                    }
                                                })}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="dialog__hint">{format!("Details unavailable: {err}")}</p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <label class="dialog__label">
                    "Emergency Level"
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            if let Some(parsed) = EmergencyLevel::from_code(&event_target_value(&ev)) {
                                level.set(parsed);
                            }
                        }
                    >
                        {EmergencyLevel::SELECTABLE
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.as_str() selected=move || level.get() == option>
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Coordinator Note"
                    <textarea
                        class="dialog__input"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if pending.get() { "Approving..." } else { "Approve" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
