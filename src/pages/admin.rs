//! Administration panel: the registered user list.

use leptos::prelude::*;

use crate::auth::claims::Role;
use crate::components::panel_layout::PanelLayout;
use crate::net::admin_api;
use crate::net::http::use_api_handle;
use crate::net::types::UserSummary;

/// User table with role and team membership.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api_handle();

    let users = RwSignal::new(Vec::<UserSummary>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let refresh_tick = RwSignal::new(0u32);

    Effect::new(move || {
        refresh_tick.get();
        let api = api.get_value();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match admin_api::list_users(&api).await {
                Ok(list) => {
                    load_error.set(None);
                    users.set(list);
                }
                Err(err) => load_error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    });

    view! {
        <PanelLayout title="Administration" subtitle="Admin Panel" nav=vec![("/admin", "Users")]>
            <div class="panel__toolbar">
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
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Role"</th>
                        <th>"Team"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let role = user
                                    .role_name
                                    .as_deref()
                                    .and_then(Role::from_claim)
                                    .unwrap_or_default()
                                    .label();
                                let team = user.team_name.clone().map_or_else(
                                    || "-".to_owned(),
                                    |team| {
                                        if user.is_team_leader.unwrap_or(false) {
                                            format!("{team} (leader)")
                                        } else {
                                            team
                                        }
                                    },
                                );
                                view! {
                                    <tr>
                                        <td>{user.full_name.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.phone_number.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{role}</td>
                                        <td>{team}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            {move || {
                (users.get().is_empty() && !loading.get())
                    .then(|| view! { <p class="panel__empty">"No users found."</p> })
            }}
        </PanelLayout>
    }
}
