use super::*;

#[test]
fn extract_message_prefers_message_then_error() {
    assert_eq!(extract_message(400, r#"{"message":"m1","error":"m2"}"#), "m1");
    assert_eq!(extract_message(400, r#"{"error":"m2"}"#), "m2");
}

#[test]
fn extract_message_passes_plain_text_through() {
    assert_eq!(extract_message(400, "Logout successful"), "Logout successful");
}

#[test]
fn extract_message_falls_back_to_the_status() {
    assert_eq!(extract_message(502, "   "), "request failed with status 502");
}

#[test]
fn json_without_known_fields_is_surfaced_raw() {
    assert_eq!(extract_message(422, r#"{"detail":"x"}"#), r#"{"detail":"x"}"#);
}

#[test]
fn error_display_includes_context() {
    let err = ApiError::Api { status: 422, message: "Ten nguoi gui khong duoc de trong".to_owned() };
    assert_eq!(err.to_string(), "Ten nguoi gui khong duoc de trong");
    assert!(ApiError::SessionExpired("refresh rejected".to_owned())
        .to_string()
        .contains("session expired"));
}
