use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(ServerConfig::from_lookup(|_| None).unwrap().port, DEFAULT_PORT);
    assert_eq!(ServerConfig::from_lookup(|_| Some("  ".to_owned())).unwrap().port, DEFAULT_PORT);
}

#[test]
fn port_is_parsed_and_bound_on_all_interfaces() {
    let config = ServerConfig::from_lookup(|k| (k == "PORT").then(|| "8080".to_owned())).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(|_| Some("http".to_owned())).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "http"));
    assert!(ServerConfig::from_lookup(|_| Some("70000".to_owned())).is_err());
}
