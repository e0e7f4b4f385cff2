//! Role-scoped route guard.
//!
//! The decision is a pure function of the current auth state and the
//! required role set, re-evaluated on every render with no memory of its
//! own. While the initial token decode is pending the guard renders a
//! neutral placeholder instead of deciding, which avoids a flash redirect
//! to the login page on a cold load with a valid stored token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::auth::claims::Role;
use crate::auth::session::{AuthState, use_auth};

/// Decision for one render of a guarded subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The initial token decode has not resolved yet.
    Pending,
    /// Not authenticated.
    RedirectToLogin,
    /// Authenticated but the role is outside the required set: an
    /// authorization failure, distinct from the login redirect.
    RedirectToHome,
    Allow,
}

/// Evaluate the guard. An empty `required` set means any authenticated
/// user may pass.
#[must_use]
pub fn evaluate(state: &AuthState, required: &[Role]) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    if !state.authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    if required.is_empty() {
        return GuardOutcome::Allow;
    }
    match state.role {
        Some(role) if required.contains(&role) => GuardOutcome::Allow,
        _ => GuardOutcome::RedirectToHome,
    }
}

/// Wrap a subtree that only the given roles may see.
#[component]
pub fn RoleGuard(
    /// Roles allowed through; empty means any authenticated user.
    #[prop(optional)]
    roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    view! {
        {move || match evaluate(&state.get(), &roles) {
            GuardOutcome::Pending => view! { <div class="guard-pending">"Loading..."</div> }.into_any(),
            GuardOutcome::RedirectToLogin => view! { <Redirect path="/login"/> }.into_any(),
            GuardOutcome::RedirectToHome => view! { <Redirect path="/"/> }.into_any(),
            GuardOutcome::Allow => children().into_any(),
        }}
    }
}
