//! Manager panel: inventory dashboards for teams, vehicles, and supplies.

pub mod supplies;
pub mod teams;
pub mod vehicles;

use leptos::prelude::*;

use crate::components::panel_layout::PanelLayout;
use crate::components::stat_card::StatCard;
use crate::net::http::use_api_handle;
use crate::net::{supply_api, team_api, vehicle_api};

/// Sidebar navigation shared by the manager pages.
pub(crate) const NAV: [(&str, &str); 4] = [
    ("/manager", "Dashboard"),
    ("/manager/teams", "Rescue Teams"),
    ("/manager/vehicles", "Vehicles"),
    ("/manager/supplies", "Supplies"),
];

/// Inventory overview with headline counts.
#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let api = use_api_handle();

    let team_count = RwSignal::new(0usize);
    let vehicle_count = RwSignal::new(0usize);
    let supply_count = RwSignal::new(0usize);

    Effect::new(move || {
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            let (teams, vehicles, supplies) = futures::join!(
                team_api::list_teams(&api),
                vehicle_api::list_vehicles(&api),
                supply_api::list_supplies(&api),
            );
            if let Ok(list) = teams {
                team_count.set(list.len());
            }
            if let Ok(list) = vehicles {
                vehicle_count.set(list.len());
            }
            if let Ok(list) = supplies {
                supply_count.set(list.len());
            }
        });
    });

    view! {
        <PanelLayout title="Manager Dashboard" subtitle="Manager Panel" nav=NAV.to_vec()>
            <p class="panel__lede">"Keep rescue teams, vehicles, and supplies ready for dispatch."</p>

            <div class="panel__stats">
                <StatCard label="Rescue Teams" value=team_count.into() accent="cyan"/>
                <StatCard label="Vehicles" value=vehicle_count.into() accent="blue"/>
                <StatCard label="Supply Lines" value=supply_count.into() accent="green"/>
            </div>

            <div class="panel__cards">
                <a class="home-card" href="/manager/teams">
                    <h2>"Rescue Teams"</h2>
                    <p>"Create teams, assign leaders, and manage rosters."</p>
                </a>
                <a class="home-card" href="/manager/vehicles">
                    <h2>"Vehicles"</h2>
                    <p>"Track boats and trucks, set maintenance status."</p>
                </a>
                <a class="home-card" href="/manager/supplies">
                    <h2>"Supplies"</h2>
                    <p>"Manage food, water, medical, and equipment stock."</p>
                </a>
            </div>
        </PanelLayout>
    }
}
