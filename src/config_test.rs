use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_nothing_is_set() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(!cfg.payments_enabled());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        (API_BASE_URL_VAR, "https://api.escenarte.test/api/"),
        (PAYMENT_KEY_VAR, "pk_test_123"),
        (REQUEST_TIMEOUT_VAR, "30"),
        (CONNECT_TIMEOUT_VAR, "3"),
    ]))
    .unwrap();

    assert_eq!(cfg.api_base_url, "https://api.escenarte.test/api");
    assert_eq!(cfg.payment_publishable_key.as_deref(), Some("pk_test_123"));
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 30, connect_secs: 3 });
    assert!(cfg.payments_enabled());
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(API_BASE_URL_VAR, "   "), (PAYMENT_KEY_VAR, "")])).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert!(cfg.payment_publishable_key.is_none());
}

#[test]
fn from_lookup_accepts_root_relative_base_url() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[(API_BASE_URL_VAR, "/api")])).unwrap();
    assert_eq!(cfg.api_base_url, "/api");
}

#[test]
fn from_lookup_rejects_bad_base_url() {
    let err = ClientConfig::from_lookup(lookup_from(&[(API_BASE_URL_VAR, "ftp://example.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://example.test".to_owned()));
}

#[test]
fn from_lookup_rejects_non_numeric_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[(REQUEST_TIMEOUT_VAR, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: REQUEST_TIMEOUT_VAR, value: "soon".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[(CONNECT_TIMEOUT_VAR, "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: CONNECT_TIMEOUT_VAR, .. }));
}

#[test]
fn new_trims_trailing_slash() {
    let cfg = ClientConfig::new("http://localhost:5000/api/").unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:5000/api");
    assert_eq!(cfg.timeouts, Timeouts::default());
}
