use super::*;

fn filled(role: Role) -> RegisterForm {
    RegisterForm {
        name: " Ana Torres ".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        ..RegisterForm::new(role)
    }
}

#[test]
fn role_from_query_defaults_to_musician() {
    assert_eq!(role_from_query(Some("organizer")), Role::Organizer);
    assert_eq!(role_from_query(Some("musician")), Role::Musician);
    assert_eq!(role_from_query(Some("organizador")), Role::Musician);
    assert_eq!(role_from_query(None), Role::Musician);
}

#[test]
fn identity_step_reports_first_problem() {
    assert_eq!(filled(Role::Musician).check_identity(), Ok(()));

    let missing = RegisterForm { name: String::new(), ..filled(Role::Musician) };
    assert_eq!(missing.check_identity(), Err("Todos los campos son obligatorios".to_owned()));

    let mismatch = RegisterForm { confirm_password: "secret2".to_owned(), ..filled(Role::Musician) };
    assert_eq!(mismatch.check_identity(), Err("Las contraseñas no coinciden".to_owned()));

    let short = RegisterForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..filled(Role::Musician) };
    assert!(short.check_identity().unwrap_err().contains("al menos 6"));
}

#[test]
fn toggle_choice_adds_then_removes() {
    let mut list = vec!["rock".to_owned()];
    toggle_choice(&mut list, "jazz");
    assert_eq!(list, ["rock", "jazz"]);
    toggle_choice(&mut list, "rock");
    assert_eq!(list, ["jazz"]);
}

#[test]
fn choice_fields_are_independent() {
    let mut form = filled(Role::Musician);
    form.toggle_choice(ChoiceField::Genres, "flamenco");
    assert!(form.has_choice(ChoiceField::Genres, "flamenco"));
    assert!(!form.has_choice(ChoiceField::Instruments, "flamenco"));
}

#[test]
fn musician_registration_carries_musician_profile() {
    let mut form = filled(Role::Musician);
    form.toggle_choice(ChoiceField::Instruments, "guitarra");
    form.experience = "avanzado".to_owned();
    form.venue_name = "ignored".to_owned();

    let registration = form.registration();
    assert_eq!(registration.name, "Ana Torres");
    assert_eq!(registration.role, Role::Musician);
    let profile = registration.profile.as_musician().unwrap();
    assert_eq!(profile.instruments, ["guitarra"]);
    assert_eq!(profile.experience, "avanzado");
}

#[test]
fn organizer_registration_parses_capacity_leniently() {
    let mut form = filled(Role::Organizer);
    form.venue_name = " Sala Sur ".to_owned();
    form.capacity = " 120 ".to_owned();
    form.toggle_choice(ChoiceField::EventTypes, "jam");

    let registration = form.registration();
    let profile = registration.profile.as_organizer().unwrap();
    assert_eq!(profile.venue_name, "Sala Sur");
    assert_eq!(profile.capacity, Some(120));
    assert_eq!(profile.event_types, ["jam"]);

    form.capacity = "muchos".to_owned();
    assert_eq!(form.profile().as_organizer().unwrap().capacity, None);
}

#[test]
fn only_validation_rejections_are_shown_verbatim() {
    let err = ApiError::Validation { status: 400, message: "El usuario ya existe".to_owned() };
    assert_eq!(register_error_message(&err), "El usuario ya existe");
    assert_eq!(register_error_message(&ApiError::Network("offline".to_owned())), REGISTER_FALLBACK);
}
