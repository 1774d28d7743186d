use super::*;

#[test]
fn backend_message_prefers_msg_field() {
    let body = r#"{"msg":"Credenciales inválidas","message":"ignored"}"#;
    assert_eq!(backend_message(400, body), "Credenciales inválidas");
}

#[test]
fn backend_message_reads_spanish_field() {
    assert_eq!(backend_message(400, r#"{"mensaje":"Ya te has postulado"}"#), "Ya te has postulado");
}

#[test]
fn backend_message_reads_validator_array() {
    let body = r#"{"errors":[{"msg":"El email no es válido","param":"email"}]}"#;
    assert_eq!(backend_message(422, body), "El email no es válido");
}

#[test]
fn backend_message_skips_empty_fields() {
    assert_eq!(backend_message(400, r#"{"msg":"","message":"second"}"#), "second");
}

#[test]
fn backend_message_falls_back_for_non_json() {
    assert_eq!(backend_message(502, "<html>Bad Gateway</html>"), "request failed with status 502");
}

#[test]
fn backend_message_falls_back_for_json_without_message() {
    assert_eq!(backend_message(500, r#"{"ok":false}"#), "request failed with status 500");
}

#[test]
fn into_authentication_only_reclassifies_client_errors() {
    let rejected = ApiError::Status { status: 400, message: "bad".into() }.into_authentication();
    assert_eq!(rejected, ApiError::Authentication { status: 400, message: "bad".into() });

    let server = ApiError::Status { status: 500, message: "boom".into() }.into_authentication();
    assert!(matches!(server, ApiError::Status { status: 500, .. }));

    let network = ApiError::Network("offline".into()).into_authentication();
    assert!(matches!(network, ApiError::Network(_)));
}

#[test]
fn into_validation_reclassifies_conflict() {
    let err = ApiError::Status { status: 409, message: "El usuario ya existe".into() }.into_validation();
    assert_eq!(err.error_code(), "E_VALIDATION");
    assert_eq!(err.user_message(), "El usuario ya existe");
}

#[test]
fn retryable_covers_network_and_server_errors() {
    assert!(ApiError::Network("timeout".into()).retryable());
    assert!(ApiError::Status { status: 503, message: String::new() }.retryable());
    assert!(ApiError::Status { status: 429, message: String::new() }.retryable());
    assert!(!ApiError::Status { status: 404, message: String::new() }.retryable());
    assert!(!ApiError::Authentication { status: 401, message: String::new() }.retryable());
}

#[test]
fn status_is_only_reported_for_response_errors() {
    assert_eq!(ApiError::from_response(403, "{}").status(), Some(403));
    assert_eq!(ApiError::Decode("eof".into()).status(), None);
}
