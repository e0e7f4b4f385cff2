//! Supply stock management.

use leptos::prelude::*;

use crate::components::panel_layout::PanelLayout;
use crate::net::http::use_api_handle;
use crate::net::supply_api;
use crate::net::types::{Supply, SupplyPayload, SupplyType};
use crate::util::format;

/// Stock table with create, edit, and delete.
#[component]
pub fn SupplyManagementPage() -> impl IntoView {
    let api = use_api_handle();

    let supplies = RwSignal::new(Vec::<Supply>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

    Effect::new(move || {
        refresh_tick.get();
        let api = api.get_value();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match supply_api::list_supplies(&api).await {
                Ok(list) => {
                    load_error.set(None);
                    supplies.set(list);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let supply_type = RwSignal::new(SupplyType::FoodWater);
    let quantity = RwSignal::new(String::from("0"));
    let unit = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let open_create = move |_| {
        editing.set(None);
        name.set(String::new());
        supply_type.set(SupplyType::FoodWater);
        quantity.set(String::from("0"));
        unit.set(String::new());
        description.set(String::new());
        form_error.set(None);
        show_form.set(true);
    };
    let open_edit = Callback::new(move |supply: Supply| {
        editing.set(Some(supply.id));
        name.set(supply.name);
        supply_type.set(supply.supply_type);
        quantity.set(supply.quantity.to_string());
        unit.set(supply.unit.unwrap_or_default());
        description.set(supply.description.unwrap_or_default());
        form_error.set(None);
        show_form.set(true);
    });

    let submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        if name.get_untracked().trim().is_empty() {
            form_error.set(Some("Supply name must not be blank".to_owned()));
            return;
        }
        let Ok(quantity_value) = quantity.get_untracked().trim().parse::<u32>() else {
            form_error.set(Some("Quantity must be a whole number".to_owned()));
            return;
        };
        pending.set(true);
        form_error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let payload = SupplyPayload {
                name: name.get_untracked().trim().to_owned(),
                supply_type: supply_type.get_untracked(),
                quantity: quantity_value,
                unit: unit.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
            };
            let result = match editing.get_untracked() {
                Some(id) => supply_api::update_supply(&api, id, &payload).await.map(|_| ()),
                None => supply_api::create_supply(&api, &payload).await.map(|_| ()),
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

    let delete = Callback::new(move |supply_id: i64| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match supply_api::delete_supply(&api, supply_id).await {
                Ok(()) => refresh_tick.update(|n| *n += 1),
                Err(err) => load_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <PanelLayout title="Supply Management" subtitle="Manager Panel" nav=super::NAV.to_vec()>
            <div class="panel__toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "+ New Supply"
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
                        <th>"Quantity"</th>
                        <th>"Expiry"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        supplies
                            .get()
                            .into_iter()
                            .map(|supply| {
                                let id = supply.id;
                                let edit_target = supply.clone();
                                let amount = format!(
                                    "{} {}",
                                    supply.quantity,
                                    supply.unit.clone().unwrap_or_else(|| "units".to_owned()),
                                );
                                view! {
                                    <tr>
                                        <td>{supply.name.clone()}</td>
                                        <td>{supply.supply_type.label()}</td>
                                        <td>{amount}</td>
                                        <td>{format::date(supply.expiry_date)}</td>
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
                (supplies.get().is_empty() && !loading.get())
                    .then(|| view! { <p class="panel__empty">"No supplies in stock."</p> })
            }}

            <Show when=move || show_form.get()>
                <div class="dialog-backdrop" on:click=move |_| show_form.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing.get().is_some() { "Edit Supply" } else { "New Supply" }}</h2>

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
                            <select
                                class="dialog__input"
                                on:change=move |ev| {
                                    if let Some(parsed) = SupplyType::from_code(&event_target_value(&ev)) {
                                        supply_type.set(parsed);
                                    }
                                }
                            >
                                {SupplyType::ALL
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.as_str() selected=move || supply_type.get() == option>
                                                {option.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Quantity"
                            <input
                                class="dialog__input"
                                type="number"
                                min="0"
                                prop:value=move || quantity.get()
                                on:input=move |ev| quantity.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Unit"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="boxes"
                                prop:value=move || unit.get()
                                on:input=move |ev| unit.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Description"
                            <textarea
                                class="dialog__input"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
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
