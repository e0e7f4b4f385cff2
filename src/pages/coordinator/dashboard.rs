//! Coordinator dashboard: queue statistics and the most recent requests.

use leptos::prelude::*;

use crate::components::assign_modal::AssignModal;
use crate::components::panel_layout::PanelLayout;
use crate::components::request_card::RequestCard;
use crate::components::stat_card::StatCard;
use crate::components::verify_modal::VerifyModal;
use crate::net::coordinator_api;
use crate::net::http::use_api_handle;
use crate::net::types::{RequestStatus, RequestSummary};

/// Dashboard with pending/validated/in-progress counts computed from the
/// loaded queue, plus the five most recent requests.
#[component]
pub fn CoordinatorDashboardPage() -> impl IntoView {
    let api = use_api_handle();

    let requests = RwSignal::new(Vec::<RequestSummary>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

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

    let pending_count = Signal::derive(move || {
        requests.get().iter().filter(|r| r.status == RequestStatus::Pending).count()
    });
    let validated_count = Signal::derive(move || {
        requests.get().iter().filter(|r| r.status == RequestStatus::Verified).count()
    });
    let in_progress_count =
        Signal::derive(move || requests.get().iter().filter(|r| r.status.is_in_progress()).count());

    let verify_target = RwSignal::new(None::<RequestSummary>);
    let assign_target = RwSignal::new(None::<RequestSummary>);
    let on_done = Callback::new(move |()| refresh_tick.update(|n| *n += 1));
    let open_verify = Callback::new(move |request| verify_target.set(Some(request)));
    let open_assign = Callback::new(move |request| assign_target.set(Some(request)));

    view! {
        <PanelLayout
            title="Coordinator Dashboard"
            subtitle="Coordinator Panel"
            nav=super::NAV.to_vec()
        >
            <p class="panel__lede">"Validate requests, assign teams, and coordinate rescue operations."</p>

            <div class="panel__toolbar">
                <button
                    class="btn"
                    disabled=move || loading.get()
                    on:click=move |_| refresh_tick.update(|n| *n += 1)
                >
                    {move || if loading.get() { "Refreshing..." } else { "Refresh Data" }}
                </button>
            </div>

            {move || load_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

            <div class="panel__stats">
                <StatCard label="Pending" value=pending_count accent="yellow"/>
                <StatCard label="Validated" value=validated_count accent="cyan"/>
                <StatCard label="In Progress" value=in_progress_count accent="blue"/>
            </div>

            <h2 class="panel__section">"Recent Requests"</h2>
            <div class="panel__list">
                {move || {
                    requests
                        .get()
                        .into_iter()
                        .take(5)
                        .map(|request| {
                            view! {
                                <RequestCard request=request on_verify=open_verify on_assign=open_assign/>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    (requests.get().is_empty() && !loading.get())
                        .then(|| view! { <p class="panel__empty">"No requests yet."</p> })
                }}
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
