use super::*;
use escenarte::types::Profile;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        profile: Profile::empty_for(&role),
        role,
        multimedia: escenarte::types::Multimedia::default(),
    }
}

#[test]
fn default_state_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.snapshot(), SessionSnapshot::initial());
}

#[test]
fn mirrors_snapshot_both_ways() {
    let snapshot = SessionSnapshot::settled(Some(user(Role::Organizer)));
    let state = AuthState::from(&snapshot);
    assert!(!state.loading);
    assert_eq!(state.role(), Some(&Role::Organizer));
    assert_eq!(state.display_name(), "Ana");
    assert_eq!(state.snapshot(), snapshot);
}

#[test]
fn logged_out_state_has_no_role_or_name() {
    let state = AuthState::from(SessionSnapshot::settled(None));
    assert!(state.role().is_none());
    assert_eq!(state.display_name(), "");
}
