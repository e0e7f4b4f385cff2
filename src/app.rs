//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;

use crate::auth::claims::Role;
use crate::auth::events::{AuthBus, AuthEvent};
use crate::auth::session::{provide_auth, use_auth};
use crate::auth::store;
use crate::components::guard::RoleGuard;
use crate::net::http::ApiClient;
use crate::pages::admin::AdminDashboardPage;
use crate::pages::coordinator::dashboard::CoordinatorDashboardPage;
use crate::pages::coordinator::requests::RequestQueuePage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::manager::ManagerDashboardPage;
use crate::pages::manager::supplies::SupplyManagementPage;
use crate::pages::manager::teams::TeamManagementPage;
use crate::pages::manager::vehicles::VehicleManagementPage;
use crate::pages::register::RegisterPage;
use crate::pages::request_rescue::RequestRescuePage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::team::TeamDashboardPage;
use crate::pages::track::TrackPage;

/// Root component: session + API client contexts, the router, and the
/// single top-level listener that owns session-expiry navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bus = AuthBus::new();
    let token_store = store::default_store();
    provide_auth(Rc::clone(&token_store), bus.clone());
    provide_context(StoredValue::new_local(ApiClient::new(token_store, bus)));

    view! {
        <Title text="FloodCoord"/>

        <Router>
            <SessionExpiryRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("request") view=RequestRescuePage/>
                <Route path=StaticSegment("track") view=TrackPage/>

                <Route
                    path=StaticSegment("coordinator")
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Coordinator, Role::Admin]>
                                <CoordinatorDashboardPage/>
                            </RoleGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("coordinator"), StaticSegment("requests"))
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Coordinator, Role::Admin]>
                                <RequestQueuePage/>
                            </RoleGuard>
                        }
                    }
                />

                <Route
                    path=StaticSegment("manager")
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Manager, Role::Admin]>
                                <ManagerDashboardPage/>
                            </RoleGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("teams"))
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Manager, Role::Admin]>
                                <TeamManagementPage/>
                            </RoleGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("vehicles"))
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Manager, Role::Admin]>
                                <VehicleManagementPage/>
                            </RoleGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("manager"), StaticSegment("supplies"))
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Manager, Role::Admin]>
                                <SupplyManagementPage/>
                            </RoleGuard>
                        }
                    }
                />

                <Route
                    path=StaticSegment("team")
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::RescueTeam, Role::TeamMember]>
                                <TeamDashboardPage/>
                            </RoleGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RoleGuard roles=vec![Role::Admin]>
                                <AdminDashboardPage/>
                            </RoleGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Single owner of the session-expired navigation decision. The HTTP
/// layer only emits `LoggedOut`; this listener routes to the login page.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let navigate = use_navigate();
    let bus = use_auth().bus().clone();
    bus.subscribe(move |event| {
        if event == AuthEvent::LoggedOut {
            navigate("/login", leptos_router::NavigateOptions::default());
        }
    });
}
