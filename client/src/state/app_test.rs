use super::*;
use escenarte::config::DEFAULT_API_BASE_URL;

#[test]
fn unknown_keys_are_never_baked() {
    assert_eq!(build_env("HOME"), None);
    assert_eq!(build_env(""), None);
}

#[test]
fn valid_lookup_is_used_as_is() {
    let config = config_from(|key| (key == API_BASE_URL_VAR).then(|| "/api/".to_owned()));
    assert_eq!(config.api_base_url, "/api");
}

#[test]
fn invalid_lookup_falls_back_to_defaults() {
    let config = config_from(|key| (key == REQUEST_TIMEOUT_VAR).then(|| "soon".to_owned()));
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config, ClientConfig::default());
}
