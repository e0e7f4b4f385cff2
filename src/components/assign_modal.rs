//! Multi-resource assignment dialog for validated requests.
//!
//! The coordinator picks a rescue team (required), a vehicle (optional),
//! and supply quantities (optional), then dispatches. The backend moves
//! the request to IN_PROGRESS, marks the vehicle IN_USE, and deducts the
//! supplies.

use leptos::prelude::*;

use crate::net::http::use_api_handle;
use crate::net::types::{AssignSupply, AssignTask, EmergencyLevel, RequestSummary};
use crate::net::{coordinator_api, supply_api, team_api, vehicle_api};

#[derive(Clone, Debug, Default)]
struct AssignResources {
    teams: Vec<crate::net::types::RescueTeam>,
    vehicles: Vec<crate::net::types::Vehicle>,
    supplies: Vec<crate::net::types::Supply>,
}

/// Assignment dialog; `on_done` fires after a successful dispatch so the
/// caller can refetch its queue.
#[component]
pub fn AssignModal(
    request: RequestSummary,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let api = use_api_handle();

    // The three inventories load concurrently, narrowed to what can
    // actually be dispatched; a failed list degrades to empty rather than
    // blocking the whole dialog.
    let resources = LocalResource::new({
        move || {
            let api = api.get_value();
            async move {
                let (teams, vehicles, supplies) = futures::join!(
                    team_api::available_teams(&api),
                    vehicle_api::available_vehicles(&api),
                    supply_api::available_supplies(&api),
                );
                AssignResources {
                    teams: teams.unwrap_or_else(|e| {
                        log::warn!("failed to load teams: {e}");
                        Vec::new()
                    }),
                    vehicles: vehicles.unwrap_or_else(|e| {
                        log::warn!("failed to load vehicles: {e}");
                        Vec::new()
                    }),
                    supplies: supplies.unwrap_or_else(|e| {
                        log::warn!("failed to load supplies: {e}");
                        Vec::new()
                    }),
                }
            }
        }
    });

    let team = RwSignal::new(None::<i64>);
    let vehicle = RwSignal::new(None::<i64>);
    let picked = RwSignal::new(Vec::<AssignSupply>::new());
    let note = RwSignal::new(String::new());
    let level = RwSignal::new(match request.emergency_level {
        EmergencyLevel::Normal => EmergencyLevel::Medium,
        other => other,
    });
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let toggle_supply = move |supply_id: i64| {
        picked.update(|list| {
            if let Some(position) = list.iter().position(|s| s.supply_id == supply_id) {
                list.remove(position);
            } else {
                list.push(AssignSupply { supply_id, quantity: 1 });
            }
        });
    };
    let change_quantity = move |supply_id: i64, increase: bool| {
        picked.update(|list| {
            if let Some(entry) = list.iter_mut().find(|s| s.supply_id == supply_id) {
                entry.quantity = if increase {
                    entry.quantity.saturating_add(1)
                } else {
                    // Deselecting is the checkbox's job; quantities stay
                    // at one or above.
                    entry.quantity.saturating_sub(1).max(1)
                };
            }
        });
    };

    let request_id = request.request_id;
    let submit = Callback::new(move |()| {
        let Some(team_id) = team.get_untracked() else {
            error.set(Some("Please select a rescue team".to_owned()));
            return;
        };
        if pending.get_untracked() {
            return;
        }
        pending.set(true);
        error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let body = AssignTask {
                rescue_team_id: team_id,
                vehicle_id: vehicle.get_untracked(),
                supplies: picked.get_untracked(),
                note: note.get_untracked(),
                emergency_level: level.get_untracked(),
            };
            match coordinator_api::assign_task(&api, request_id, &body).await {
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
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Assign Resources"</h2>
                <p class="dialog__hint">{format!("Dispatch for \"{}\"", request.title)}</p>

                {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                <Suspense fallback=move || view! { <p>"Loading resources..."</p> }>
                    {move || {
                        resources
                            .get()
                            .map(|res| {
                                view! {
                                    <label class="dialog__label">
                                        "Rescue Team"
                                        <select
                                            class="dialog__input"
                                            on:change=move |ev| team.set(event_target_value(&ev).parse::<i64>().ok())
                                        >
                                            <option value="">"Select a team"</option>
                                            {res
                                                .teams
                                                .iter()
                                                .map(|t| {
                                                    let label = format!("{} ({} members)", t.name, t.members.len());
                                                    view! { <option value=t.id.to_string()>{label}</option> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>

                                    <label class="dialog__label">
                                        "Vehicle (optional)"
                                        <select
                                            class="dialog__input"
                                            on:change=move |ev| vehicle.set(event_target_value(&ev).parse::<i64>().ok())
                                        >
                                            <option value="">"No vehicle"</option>
                                            {res
                                                .vehicles
                                                .iter()
                                                .map(|v| {
                                                    let label = format!("{} [{}]", v.name, v.status.label());
                                                    view! { <option value=v.id.to_string()>{label}</option> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>

                                    <div class="dialog__label">
                                        "Supplies (optional)"
                                        {res
                                            .supplies
                                            .iter()
                                            .map(|s| {
                                                let id = s.id;
                                                let label = format!(
                                                    "{} ({} {} in stock)",
                                                    s.name,
                                                    s.quantity,
                                                    s.unit.clone().unwrap_or_else(|| "units".to_owned()),
                                                );
                                                view! {
                                                    <div class="assign-supply">
                                                        <label class="assign-supply__pick">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    picked.get().iter().any(|p| p.supply_id == id)
                                                                }
                                                                on:change=move |_| toggle_supply(id)
                                                            />
                                                            {label}
                                                        </label>
                                                        {move || {
                                                            picked
                                                                .get()
                                                                .iter()
                                                                .find(|p| p.supply_id == id)
                                                                .map(|entry| entry.quantity)
                                                                .map(|quantity| {
                                                                    view! {
                                                                        <span class="assign-supply__qty">
                                                                            <button
                                                                                class="btn btn--small"
                                                                                on:click=move |_| change_quantity(id, false)
                                                                            >
                                                                                "-"
                                                                            </button>
                                                                            {quantity}
                                                                            <button
                                                                                class="btn btn--small"
                                                                                on:click=move |_| change_quantity(id, true)
                                                                            >
                                                                                "+"
                                                                            </button>
                                                                        </span>
                                                                    }
                                                                })
                                                        }}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>

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
                    "Instructions"
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
                        {move || if pending.get() { "Assigning..." } else { "Assign" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
