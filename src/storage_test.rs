use super::*;

#[test]
fn memory_store_starts_empty() {
    assert!(MemoryTokenStore::new().load().is_none());
}

#[test]
fn memory_store_save_overwrites_prior_token() {
    let store = MemoryTokenStore::with_token("old");
    store.save("new").unwrap();
    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("abc");
    store.clear();
    store.clear();
    assert!(store.load().is_none());
}
