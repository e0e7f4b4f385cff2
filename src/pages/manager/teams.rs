//! Rescue team roster management.

use leptos::prelude::*;

use crate::components::panel_layout::PanelLayout;
use crate::net::http::use_api_handle;
use crate::net::team_api;
use crate::net::types::{RescueTeam, RescueTeamPayload};

/// Parse a comma-separated list of member ids, dropping blanks.
fn parse_member_ids(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|piece| piece.trim().parse::<i64>().ok())
        .collect()
}

/// Team table with create, edit, and delete. The roster is edited as a
/// leader id plus a comma-separated member id list.
#[component]
pub fn TeamManagementPage() -> impl IntoView {
    let api = use_api_handle();

    let teams = RwSignal::new(Vec::<RescueTeam>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

    Effect::new(move || {
        refresh_tick.get();
        let api = api.get_value();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match team_api::list_teams(&api).await {
                Ok(list) => {
                    load_error.set(None);
                    teams.set(list);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let leader_id = RwSignal::new(String::new());
    let member_ids = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let open_create = move |_| {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        leader_id.set(String::new());
        member_ids.set(String::new());
        form_error.set(None);
        show_form.set(true);
    };
    let open_edit = Callback::new(move |team: RescueTeam| {
        editing.set(Some(team.id));
        name.set(team.name);
        description.set(team.description.unwrap_or_default());
        leader_id.set(team.leader_id.map(|id| id.to_string()).unwrap_or_default());
        member_ids.set(
            team.members
                .iter()
                .map(|member| member.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
        form_error.set(None);
        show_form.set(true);
    });

    let submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        if name.get_untracked().trim().is_empty() {
            form_error.set(Some("Team name must not be blank".to_owned()));
            return;
        }
        pending.set(true);
        form_error.set(None);

        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let payload = RescueTeamPayload {
                name: name.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                leader_id: leader_id.get_untracked().trim().parse().ok(),
                member_ids: parse_member_ids(&member_ids.get_untracked()),
            };
            let result = match editing.get_untracked() {
                Some(id) => team_api::update_team(&api, id, &payload).await.map(|_| ()),
                None => team_api::create_team(&api, &payload).await.map(|_| ()),
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

    let delete = Callback::new(move |team_id: i64| {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            match team_api::delete_team(&api, team_id).await {
                Ok(()) => refresh_tick.update(|n| *n += 1),
                Err(err) => load_error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <PanelLayout title="Rescue Team Management" subtitle="Manager Panel" nav=super::NAV.to_vec()>
            <div class="panel__toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "+ New Team"
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
                        <th>"Leader"</th>
                        <th>"Members"</th>
                        <th>"Active"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        teams
                            .get()
                            .into_iter()
                            .map(|team| {
                                let id = team.id;
                                let edit_target = team.clone();
                                view! {
                                    <tr>
                                        <td>{team.name.clone()}</td>
                                        <td>{team.leader_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{team.members.len()}</td>
                                        <td>{if team.is_active.unwrap_or(true) { "Yes" } else { "No" }}</td>
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
                (teams.get().is_empty() && !loading.get())
                    .then(|| view! { <p class="panel__empty">"No rescue teams yet."</p> })
            }}

            <Show when=move || show_form.get()>
                <div class="dialog-backdrop" on:click=move |_| show_form.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>{move || if editing.get().is_some() { "Edit Team" } else { "New Team" }}</h2>

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
                            "Description"
                            <textarea
                                class="dialog__input"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="dialog__label">
                            "Leader User Id"
                            <input
                                class="dialog__input"
                                type="number"
                                prop:value=move || leader_id.get()
                                on:input=move |ev| leader_id.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Member User Ids (comma separated)"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="12, 15, 23"
                                prop:value=move || member_ids.get()
                                on:input=move |ev| member_ids.set(event_target_value(&ev))
                            />
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
