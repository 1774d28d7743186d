use super::*;

#[test]
fn replace_flag_carries_into_router_options() {
    let push = PendingNavigation { path: "/".to_owned(), replace: false };
    let replace = PendingNavigation { path: "/login".to_owned(), replace: true };
    assert!(!push.options().replace);
    assert!(replace.options().replace);
    assert!(replace.options().scroll);
}
