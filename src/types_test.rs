use serde_json::json;

use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_canonical_spellings() {
    assert_eq!(Role::from_wire("musician"), Role::Musician);
    assert_eq!(Role::from_wire("organizer"), Role::Organizer);
    assert_eq!(serde_json::to_value(Role::Organizer).unwrap(), json!("organizer"));
}

#[test]
fn role_keeps_legacy_spellings_verbatim() {
    for legacy in ["musico", "organizador", "Musician"] {
        let role: Role = serde_json::from_value(json!(legacy)).unwrap();
        assert_eq!(role, Role::Unrecognized(legacy.to_owned()));
        assert_eq!(role.as_str(), legacy);
    }
}

#[test]
fn role_null_decodes_as_empty_unrecognized() {
    let role: Role = serde_json::from_value(Value::Null).unwrap();
    assert_eq!(role, Role::default());
    assert_eq!(role.as_str(), "");
}

// =============================================================
// User
// =============================================================

#[test]
fn musician_user_decodes_tagged_profile() {
    let user: User = serde_json::from_value(json!({
        "_id": "u1",
        "name": "Ana",
        "email": "ana@example.com",
        "role": "musician",
        "profile": {
            "bio": "Guitarrista",
            "genres": ["jazz", "flamenco"],
            "instruments": ["guitarra"],
            "experience": "10 años",
            "tarifa": { "monto": 150.0 }
        },
        "multimedia": {
            "profilePhoto": "https://cdn.test/ana.jpg",
            "fotos": ["https://cdn.test/1.jpg", { "url": "https://cdn.test/2.jpg", "titulo": "Directo" }],
            "audio": []
        }
    }))
    .unwrap();

    assert_eq!(user.id, "u1");
    assert!(user.is_musician());
    let profile = user.profile.as_musician().unwrap();
    assert_eq!(profile.genres, vec!["jazz", "flamenco"]);
    assert_eq!(profile.rate.as_ref().map(|r| r.amount), Some(150.0));
    assert!(user.profile.as_organizer().is_none());
    assert_eq!(user.multimedia.profile_photo.as_deref(), Some("https://cdn.test/ana.jpg"));
    assert_eq!(user.multimedia.photos.len(), 2);
    assert_eq!(user.multimedia.photos[1].title.as_deref(), Some("Directo"));
}

#[test]
fn organizer_user_accepts_string_capacity_and_plain_id() {
    let user: User = serde_json::from_value(json!({
        "id": "o1",
        "name": "Sala Sur",
        "email": "sala@example.com",
        "role": "organizer",
        "profile": { "venueName": "Sala Sur", "venueType": "bar", "capacity": "120", "eventTypes": ["conciertos"] }
    }))
    .unwrap();

    assert_eq!(user.id, "o1");
    let profile = user.profile.as_organizer().unwrap();
    assert_eq!(profile.venue_name, "Sala Sur");
    assert_eq!(profile.capacity, Some(120));
    assert_eq!(user.multimedia, Multimedia::default());
}

#[test]
fn organizer_blank_capacity_is_none() {
    let profile: OrganizerProfile = serde_json::from_value(json!({ "capacity": "" })).unwrap();
    assert_eq!(profile.capacity, None);
}

#[test]
fn null_profile_fields_fall_back_to_defaults() {
    let profile: MusicianProfile = serde_json::from_value(json!({ "bio": null, "genres": null })).unwrap();
    assert_eq!(profile, MusicianProfile::default());
}

#[test]
fn missing_profile_yields_empty_profile_for_role() {
    let user: User = serde_json::from_value(json!({ "_id": "u2", "role": "organizer" })).unwrap();
    assert_eq!(user.profile, Profile::Organizer(OrganizerProfile::default()));
}

#[test]
fn unrecognized_role_keeps_raw_profile() {
    let user: User = serde_json::from_value(json!({
        "_id": "u3",
        "role": "musico",
        "profile": { "bio": "legacy", "instrumento": "bajo" }
    }))
    .unwrap();

    assert_eq!(user.role.as_str(), "musico");
    assert_eq!(user.profile.bio(), Some("legacy"));
    assert!(matches!(user.profile, Profile::Unrecognized(_)));
}

#[test]
fn unreadable_profile_for_known_role_is_kept_raw() {
    let user: User = serde_json::from_value(json!({
        "_id": "u4",
        "role": "musician",
        "profile": { "bio": "trompeta", "genres": "jazz" }
    }))
    .unwrap();

    assert_eq!(user.role, Role::Musician);
    assert!(matches!(user.profile, Profile::Unrecognized(_)));
    assert_eq!(user.profile.bio(), Some("trompeta"));
}

#[test]
fn organizer_fractional_capacity_is_truncated() {
    let profile: OrganizerProfile = serde_json::from_value(json!({ "capacity": "150.5" })).unwrap();
    assert_eq!(profile.capacity, Some(150));

    let profile: OrganizerProfile = serde_json::from_value(json!({ "capacity": 99.9 })).unwrap();
    assert_eq!(profile.capacity, Some(99));
}

#[test]
fn organizer_unreadable_capacity_is_none() {
    for raw in [json!("muchos"), json!(-5), json!(true)] {
        let profile: OrganizerProfile = serde_json::from_value(json!({ "capacity": raw })).unwrap();
        assert_eq!(profile.capacity, None);
    }
}

#[test]
fn musician_rate_accepts_string_amount() {
    let profile: MusicianProfile =
        serde_json::from_value(json!({ "tarifa": { "monto": "80", "moneda": "EUR" } })).unwrap();
    let rate = profile.rate.unwrap();
    assert!((rate.amount - 80.0).abs() < f64::EPSILON);
    assert_eq!(rate.currency.as_deref(), Some("EUR"));
}

#[test]
fn user_serializes_with_mongo_id() {
    let user: User = serde_json::from_value(json!({ "id": "u5", "role": "musician" })).unwrap();
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["_id"], "u5");
    assert_eq!(value["role"], "musician");
}

// =============================================================
// Registration
// =============================================================

#[test]
fn registration_serializes_flat_profile() {
    let mut reg = Registration::new("Ana", "ana@example.com", "secreto", Role::Musician);
    if let Profile::Musician(p) = &mut reg.profile {
        p.instruments.push("voz".to_owned());
    }
    let value = serde_json::to_value(&reg).unwrap();
    assert_eq!(value["role"], "musician");
    assert_eq!(value["profile"]["instruments"], json!(["voz"]));
    assert!(value.get("confirmPassword").is_none());
}

#[test]
fn registration_validation_messages() {
    let reg = Registration::new("Ana", "ana@example.com", "secreto", Role::Organizer);
    assert!(reg.validate("secreto").is_ok());
    assert_eq!(
        reg.validate("otro").unwrap_err(),
        ApiError::InvalidInput("Las contraseñas no coinciden".to_owned())
    );
    assert_eq!(
        reg.validate("").unwrap_err(),
        ApiError::InvalidInput("Todos los campos son obligatorios".to_owned())
    );

    let short = Registration::new("Ana", "ana@example.com", "123", Role::Musician);
    assert!(matches!(short.validate("123"), Err(ApiError::InvalidInput(m)) if m.contains("6 caracteres")));
}

#[test]
fn registration_requires_known_role() {
    let reg = Registration::new("Ana", "ana@example.com", "secreto", Role::from_wire("musico"));
    assert!(reg.validate("secreto").is_err());
}

#[test]
fn debug_output_redacts_secrets() {
    let creds = Credentials::new(" ana@example.com ", "hunter22");
    assert_eq!(creds.email, "ana@example.com");
    let rendered = format!("{creds:?}");
    assert!(!rendered.contains("hunter22"));

    let reg = Registration::new("Ana", "ana@example.com", "hunter22", Role::Musician);
    assert!(!format!("{reg:?}").contains("hunter22"));
}
