//! Coordinator request queue with search and status filtering.

use leptos::prelude::*;

use crate::components::assign_modal::AssignModal;
use crate::components::panel_layout::PanelLayout;
use crate::components::request_card::RequestCard;
use crate::components::verify_modal::VerifyModal;
use crate::net::coordinator_api;
use crate::net::http::use_api_handle;
use crate::net::types::{RequestStatus, RequestSummary};

/// Full queue view: text search over title and contact, status filter,
/// and the validate/assign actions on each card.
#[component]
pub fn RequestQueuePage() -> impl IntoView {
    let api = use_api_handle();

    let requests = RwSignal::new(Vec::<RequestSummary>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(None::<RequestStatus>);

    Effect::new(move || {
        refresh_tick.get();
        let api = api.get_value();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match coordinator_api::list_requests(&api, None).await {
                Ok(list) => {
                    load_error.set(None);
                    requests.set(list);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let verify_target = RwSignal::new(None::<RequestSummary>);
    let assign_target = RwSignal::new(None::<RequestSummary>);
    let on_done = Callback::new(move |()| refresh_tick.update(|n| *n += 1));
    let open_verify = Callback::new(move |request| verify_target.set(Some(request)));
    let open_assign = Callback::new(move |request| assign_target.set(Some(request)));

    let filtered = move || {
        let term = search.get().to_lowercase();
        let status = status_filter.get();
        requests
            .get()
            .into_iter()
            .filter(|r| {
                term.is_empty()
                    || r.title.to_lowercase().contains(&term)
                    || r.contact_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&term))
            })
            .filter(|r| status.is_none_or(|wanted| r.status == wanted))
            .collect::<Vec<_>>()
    };

    view! {
        <PanelLayout title="Request Queue" subtitle="Coordinator Panel" nav=super::NAV.to_vec()>
            <p class="panel__lede">"Review, validate, and manage incoming rescue requests."</p>

            <div class="panel__toolbar">
                <input
                    class="panel__search"
                    type="text"
                    placeholder="Search requests..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    status_filter.set(RequestStatus::from_code(&event_target_value(&ev)));
                }>
                    <option value="ALL">"All Status"</option>
                    {RequestStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! { <option value=status.as_str()>{status.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    class="btn"
                    disabled=move || loading.get()
                    on:click=move |_| refresh_tick.update(|n| *n += 1)
                >
                    "Refresh"
                </button>
            </div>

            {move || load_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

            <div class="panel__list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|request| {
                            view! {
                                <RequestCard request=request on_verify=open_verify on_assign=open_assign/>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    (filtered().is_empty() && !loading.get())
                        .then(|| view! { <p class="panel__empty">"No requests found."</p> })
                }}
                {move || loading.get().then(|| view! { <p class="panel__empty">"Loading requests..."</p> })}
            </div>

            {move || {
                verify_target
                    .get()
                    .map(|request| {
                        view! {
                            <VerifyModal
                                request=request
                                on_close=Callback::new(move |()| verify_target.set(None))
                                on_done=on_done
                            />
                        }
                    })
            }}
            {move || {
                assign_target
                    .get()
                    .map(|request| {
                        view! {
                            <AssignModal
                                request=request
                                on_close=Callback::new(move |()| assign_target.set(None))
                                on_done=on_done
                            />
                        }
                    })
            }}
        </PanelLayout>
    }
}
