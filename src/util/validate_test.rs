use super::*;

#[test]
fn accepts_local_and_international_prefixes() {
    assert!(is_valid_phone("0912345678"));
    assert!(is_valid_phone("+84912345678"));
}

#[test]
fn rejects_wrong_lengths() {
    assert!(!is_valid_phone("091234567"));
    assert!(!is_valid_phone("09123456789"));
    assert!(!is_valid_phone("+8491234567"));
}

#[test]
fn rejects_missing_prefix_and_non_digits() {
    assert!(!is_valid_phone("912345678"));
    assert!(!is_valid_phone("09123x5678"));
    assert!(!is_valid_phone(""));
}
