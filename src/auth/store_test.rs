use super::*;

#[test]
fn empty_store_has_no_tokens() {
    let store = MemoryTokenStore::default();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn save_persists_both_tokens() {
    let store = MemoryTokenStore::default();
    store.save("access-1", Some("refresh-1"));
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn save_without_rotation_keeps_stored_refresh_token() {
    let store = MemoryTokenStore::default();
    store.save("access-1", Some("refresh-1"));
    store.save("access-2", None);
    assert_eq!(store.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn clear_removes_the_pair_together() {
    let store = MemoryTokenStore::default();
    store.save("access-1", Some("refresh-1"));
    store.clear();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}
