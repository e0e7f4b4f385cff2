use super::*;
use crate::auth::store::MemoryTokenStore;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;

fn token_with(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("header.{payload}.signature")
}

#[test]
fn login_round_trip_authenticates_with_the_encoded_role() {
    let store = MemoryTokenStore::default();
    let token = token_with(&json!({"sub": "9", "roles": ["COORDINATOR"]}));

    let state = apply_login(&store, &token, "refresh-1");

    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.role, Some(Role::Coordinator));
    assert_eq!(store.access_token().as_deref(), Some(token.as_str()));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn logout_twice_matches_logout_once() {
    let store = MemoryTokenStore::default();
    apply_login(&store, &token_with(&json!({"sub": "9"})), "refresh-1");

    let first = apply_logout(&store);
    let second = apply_logout(&store);

    assert_eq!(first, second);
    assert!(!second.authenticated);
    assert!(second.user.is_none());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn derive_state_without_stored_token_is_signed_out() {
    let store = MemoryTokenStore::default();
    let state = derive_state(&store);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.role.is_none());
    assert!(!state.loading);
}

#[test]
fn malformed_stored_token_is_treated_as_signed_out() {
    let store = MemoryTokenStore::default();
    store.save("garbage", Some("refresh-1"));

    let state = derive_state(&store);
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn tokenless_role_claims_default_to_citizen() {
    let store = MemoryTokenStore::default();
    let state = apply_login(&store, &token_with(&json!({"sub": "3"})), "refresh-1");
    assert_eq!(state.role, Some(Role::Citizen));
}
