//! Vehicle fleet management.

use leptos::prelude::*;

use crate::components::badges::VehicleStatusBadge;
use crate::components::panel_layout::PanelLayout;
use crate::net::http::use_api_handle;
use crate::net::types::{Vehicle, VehiclePayload, VehicleStatus};
use crate::net::vehicle_api;

/// Fleet table with create, edit, and delete.
#[component]
pub fn VehicleManagementPage() -> impl IntoView {
    let api = use_api_handle();

    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

    Effect::new(move || {
        refresh_tick.get();
        let api = api.get_value();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match vehicle_api::list_vehicles(&api).await {
                Ok(list) => {
                    load_error.set(None);
                    vehicles.set(list);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    // Create/edit dialog state. `editing` holds the vehicle id when the
    // form edits an existing row.
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let vehicle_type = RwSignal::new(String::new());
    let license_plate = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());
    let status = RwSignal::new(VehicleStatus::Available);
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let open_create = move |_| {
        editing.set(None);
        name.set(String::new());
        vehicle_type.set(String::new());
        license_plate.set(String::new());
        capacity.set(String::new());
        status.set(VehicleStatus::Available);
        form_error.set(None);
        show_form.set(true);
    };
    let open_edit = Callback::new(move |vehicle: Vehicle| {
        editing.set(Some(vehicle.id));
        name.set(vehicle.name);
        vehicle_type.set(vehicle.vehicle_type);
        license_plate.set(vehicle.license_plate.unwrap_or_default());
        capacity.set(vehicle.capacity.map(|c| c.to_string()).unwrap_or_default());
        status.set(vehicle.status);
        form_error.set(None);
        show_form.set(true);
    });

    let submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        if name.get_untracked().trim().is_empty() {
            form_error.set(Some("Vehicle name must not be blank".to_owned()));
            return;
        }
        pending.set(true);
        form_error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let payload = VehiclePayload {
                name: name.get_untracked().trim().to_owned(),
                vehicle_type: vehicle_type.get_untracked().trim().to_owned(),
                license_plate: license_plate.get_untracked().trim().to_owned(),
                capacity: capacity.get_untracked().trim().parse().ok(),
                status: status.get_untracked(),
            };
            let result = match editing.get_untracked() {
                Some(id) => vehicle_api::update_vehicle(&api, id, &payload).await.map(|_| ()),
                None => vehicle_api::create_vehicle(&api, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    show_form.set(false);
                    refresh_tick.update(|n| *n += 1);
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    let delete = Callback::new(move |vehicle_id: i64| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match vehicle_api::delete_vehicle(&api, vehicle_id).await {
                Ok(()) => refresh_tick.update(|n| *n += 1),
                Err(err) => load_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <PanelLayout title="Vehicle Management" subtitle="Manager Panel" nav=super::NAV.to_vec()>
            <div class="panel__toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "+ New Vehicle"
                </button>
                <button
                    class="btn"
                    disabled=move || loading.get()
                    on:click=move |_| refresh_tick.update(|n| *n += 1)
                >
                    "Refresh"
                </button>
            </div>

            {move || load_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

            <table class="panel__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Plate"</th>
                        <th>"Capacity"</th>
                        <th>"Status"</th>
                        <th>"Assigned To"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        vehicles
                            .get()
                            .into_iter()
                            .map(|vehicle| {
                                let id = vehicle.id;
                                let edit_target = vehicle.clone();
                                view! {
                                    <tr>
                                        <td>{vehicle.name.clone()}</td>
                                        <td>{vehicle.vehicle_type.clone()}</td>
                                        <td>{vehicle.license_plate.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{vehicle.capacity.map_or_else(|| "-".to_owned(), |c| c.to_string())}</td>
                                        <td><VehicleStatusBadge status=vehicle.status/></td>
                                        <td>{vehicle.current_team_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td class="panel__row-actions">
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| open_edit.run(edit_target.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button class="btn btn--small btn--danger" on:click=move |_| delete.run(id)>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            {move || {
                (vehicles.get().is_empty() && !loading.get())
                    .then(|| view! { <p class="panel__empty">"No vehicles registered."</p> })
            }}

            <Show when=move || show_form.get()>
                <div class="dialog-backdrop" on:click=move |_| show_form.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing.get().is_some() { "Edit Vehicle" } else { "New Vehicle" }}</h2>

                        {move || form_error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}

                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Type"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="BOAT"
                                prop:value=move || vehicle_type.get()
                                on:input=move |ev| vehicle_type.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "License Plate"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || license_plate.get()
                                on:input=move |ev| license_plate.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Capacity"
                            <input
                                class="dialog__input"
                                type="number"
                                min="1"
                                prop:value=move || capacity.get()
                                on:input=move |ev| capacity.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                on:change=move |ev| {
                                    if let Some(parsed) = VehicleStatus::from_code(&event_target_value(&ev)) {
                                        status.set(parsed);
                                    }
                                }
                            >
                                {VehicleStatus::ALL
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

                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_form.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" disabled=move || pending.get() on:click=submit>
                                {move || if pending.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </PanelLayout>
    }
}
