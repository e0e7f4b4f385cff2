//! Queue card for one rescue request.

use leptos::prelude::*;

use crate::components::badges::{PriorityBadge, StatusBadge};
use crate::net::types::{RequestStatus, RequestSummary};
use crate::util::format;

/// Summary card with the actions the request's state allows: validate
/// while pending, assign once validated.
#[component]
pub fn RequestCard(
    request: RequestSummary,
    #[prop(into, optional)] on_verify: Option<Callback<RequestSummary>>,
    #[prop(into, optional)] on_assign: Option<Callback<RequestSummary>>,
) -> impl IntoView {
    let contact = request
        .contact_name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_owned());
    let phone = request.contact_phone.clone().unwrap_or_else(|| "-".to_owned());

    let verify_button = (request.status == RequestStatus::Pending)
        .then_some(on_verify)
        .flatten()
        .map(|callback| {
            let target = request.clone();
            view! {
                <button class="btn btn--primary" on:click=move |_| callback.run(target.clone())>
                    "Validate"
                </button>
            }
        });
    let assign_button = (request.status == RequestStatus::Verified)
        .then_some(on_assign)
        .flatten()
        .map(|callback| {
            let target = request.clone();
            view! {
                <button class="btn btn--primary" on:click=move |_| callback.run(target.clone())>
                    "Assign Team"
                </button>
            }
        });

    view! {
        <div class="request-card">
            <div class="request-card__header">
                <h3 class="request-card__title">{request.title.clone()}</h3>
                <div class="request-card__badges">
                    <PriorityBadge level=request.emergency_level/>
                    <StatusBadge status=request.status/>
                </div>
            </div>
            <p class="request-card__meta">
                {format!("{} people", request.people_count)}
                " | "
                {contact}
                " | "
                {phone}
                " | "
                {format::timestamp(request.created_at)}
            </p>
            <div class="request-card__actions">{verify_button}{assign_button}</div>
        </div>
    }
}
