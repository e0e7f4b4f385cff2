use super::*;
use crate::auth::claims::Identity;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(Identity {
            subject: Some("1".to_owned()),
            email: None,
            role,
            claims: serde_json::Value::Null,
        }),
        role: Some(role),
        loading: false,
        authenticated: true,
    }
}

#[test]
fn loading_renders_a_placeholder_and_decides_nothing() {
    let state = AuthState { loading: true, ..AuthState::default() };
    assert_eq!(evaluate(&state, &[Role::Coordinator]), GuardOutcome::Pending);
    assert_eq!(evaluate(&state, &[]), GuardOutcome::Pending);
}

#[test]
fn unauthenticated_redirects_to_login() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state, &[]), GuardOutcome::RedirectToLogin);
    assert_eq!(evaluate(&state, &[Role::Admin]), GuardOutcome::RedirectToLogin);
}

#[test]
fn wrong_role_redirects_to_home_not_login() {
    let state = signed_in(Role::Citizen);
    assert_eq!(evaluate(&state, &[Role::Coordinator]), GuardOutcome::RedirectToHome);
}

#[test]
fn matching_role_renders_the_children() {
    let state = signed_in(Role::Coordinator);
    assert_eq!(evaluate(&state, &[Role::Coordinator]), GuardOutcome::Allow);
    assert_eq!(evaluate(&state, &[Role::Coordinator, Role::Admin]), GuardOutcome::Allow);
}

#[test]
fn empty_role_set_admits_any_authenticated_user() {
    assert_eq!(evaluate(&signed_in(Role::Citizen), &[]), GuardOutcome::Allow);
}

#[test]
fn authenticated_without_a_role_fails_closed_on_scoped_routes() {
    let mut state = signed_in(Role::Citizen);
    state.role = None;
    assert_eq!(evaluate(&state, &[Role::Manager]), GuardOutcome::RedirectToHome);
}
