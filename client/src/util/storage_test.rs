use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_rendering_has_no_token_and_refuses_writes() {
    let store = BrowserSessionStorage;
    assert!(store.save("tok").is_err());
    assert!(store.load().is_none());
    store.clear();
}
