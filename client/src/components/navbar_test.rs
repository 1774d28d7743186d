use super::*;
use escenarte::User;
use escenarte::types::{Multimedia, Profile};

fn signed_in(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            profile: Profile::empty_for(&role),
            role,
            multimedia: Multimedia::default(),
        }),
        loading: false,
    }
}

fn labels(state: &AuthState) -> Vec<&'static str> {
    nav_links(state).into_iter().map(|l| l.label).collect()
}

#[test]
fn loading_shows_only_public_links() {
    assert_eq!(labels(&AuthState::default()), ["Inicio", "Ofertas"]);
}

#[test]
fn guests_get_login_and_register() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(labels(&state), ["Inicio", "Ofertas", "Iniciar Sesión", "Registrarse"]);
}

#[test]
fn musician_sees_applications_not_offers_management() {
    let got = labels(&signed_in(Role::Musician));
    assert!(got.contains(&"Mis Postulaciones"));
    assert!(!got.contains(&"Mis Ofertas"));
    assert!(!got.contains(&"Iniciar Sesión"));
}

#[test]
fn organizer_sees_offers_management() {
    let got = labels(&signed_in(Role::Organizer));
    assert!(got.contains(&"Mis Ofertas"));
    assert!(!got.contains(&"Mis Postulaciones"));
}

#[test]
fn legacy_role_gets_no_role_links() {
    let got = labels(&signed_in(Role::Unrecognized("musico".to_owned())));
    assert!(!got.contains(&"Mis Ofertas"));
    assert!(!got.contains(&"Mis Postulaciones"));
    assert!(got.contains(&"Mi Perfil"));
}

#[test]
fn every_link_resolves_to_a_real_screen() {
    for state in [signed_in(Role::Musician), signed_in(Role::Organizer), AuthState { user: None, loading: false }] {
        for l in nav_links(&state) {
            assert_ne!(Screen::resolve(l.href).screen, Screen::NotFound, "{}", l.href);
        }
    }
}
