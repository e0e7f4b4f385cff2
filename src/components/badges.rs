//! Status and priority badges.
//!
//! Labels and classes come from the single tables on the enums in
//! `net::types`, so every list, select, and badge shows the same words.

use leptos::prelude::*;

use crate::net::types::{EmergencyLevel, RequestStatus, VehicleStatus};

/// Pill showing a rescue request's lifecycle state.
#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}

/// Pill showing a request's urgency.
#[component]
pub fn PriorityBadge(level: EmergencyLevel) -> impl IntoView {
    view! { <span class=level.badge_class()>{level.label()}</span> }
}

/// Pill showing a vehicle's availability.
#[component]
pub fn VehicleStatusBadge(status: VehicleStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}
