use super::*;
use base64::engine::general_purpose::URL_SAFE;
use serde_json::json;

fn token_with(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

// =============================================================
// Role extraction precedence
// =============================================================

#[test]
fn roles_array_takes_first_element() {
    let token = token_with(&json!({"sub": "7", "roles": ["MANAGER", "CITIZEN"]}));
    let identity = decode_identity(&token).expect("identity");
    assert_eq!(identity.role, Role::Manager);
}

#[test]
fn roles_array_wins_over_scalar_claims() {
    let token = token_with(&json!({"roles": ["RESCUE_TEAM"], "role": "ADMIN", "authority": "MANAGER"}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::RescueTeam);
}

#[test]
fn scalar_role_claim_used_when_no_array() {
    let token = token_with(&json!({"role": "COORDINATOR"}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::Coordinator);
}

#[test]
fn authority_claim_is_last_resort() {
    let token = token_with(&json!({"authority": "ADMIN"}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::Admin);
}

#[test]
fn empty_roles_array_falls_through_to_scalar_role() {
    let token = token_with(&json!({"roles": [], "role": "MANAGER"}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::Manager);
}

#[test]
fn missing_role_claims_default_to_citizen() {
    let token = token_with(&json!({"sub": "42", "email": "a@b.c"}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::Citizen);
}

#[test]
fn unrecognized_role_string_defaults_to_citizen() {
    let token = token_with(&json!({"roles": ["SUPERVISOR"]}));
    assert_eq!(decode_identity(&token).expect("identity").role, Role::Citizen);
}

// =============================================================
// Fail-closed decoding
// =============================================================

#[test]
fn malformed_tokens_decode_to_none() {
    for token in ["", "not-a-jwt", "only.two", "a.!!!.c", "a. .c"] {
        assert!(decode_identity(token).is_none(), "token {token:?} should not decode");
    }
}

#[test]
fn non_object_payload_decodes_to_none() {
    let payload = URL_SAFE_NO_PAD.encode("[1,2,3]");
    assert!(decode_identity(&format!("h.{payload}.s")).is_none());
}

#[test]
fn padded_payload_segment_still_decodes() {
    let payload = URL_SAFE.encode(json!({"role": "MANAGER"}).to_string());
    let identity = decode_identity(&format!("h.{payload}.s")).expect("identity");
    assert_eq!(identity.role, Role::Manager);
}

// =============================================================
// Identity fields and wire form
// =============================================================

#[test]
fn subject_and_email_are_extracted() {
    let token = token_with(&json!({"sub": "17", "email": "rescue@floodcoord.dev"}));
    let identity = decode_identity(&token).expect("identity");
    assert_eq!(identity.subject.as_deref(), Some("17"));
    assert_eq!(identity.email.as_deref(), Some("rescue@floodcoord.dev"));
    assert_eq!(identity.claims["sub"], json!("17"));
}

#[test]
fn role_wire_format_is_screaming_snake() {
    assert_eq!(serde_json::to_string(&Role::RescueTeam).expect("json"), r#""RESCUE_TEAM""#);
    assert_eq!(
        serde_json::from_str::<Role>(r#""TEAM_MEMBER""#).expect("role"),
        Role::TeamMember
    );
    assert_eq!(Role::Coordinator.as_str(), "COORDINATOR");
}
