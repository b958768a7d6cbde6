use super::*;

#[test]
fn http_error_displays_backend_message() {
    let err = ApiError::Http { status: 404, message: "Rol no encontrado".to_owned() };
    assert_eq!(err.to_string(), "Rol no encontrado");
    assert_eq!(err.status(), Some(404));
    assert!(!err.is_unauthorized());
}

#[test]
fn network_error_displays_failure_message() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Failed to fetch");
    assert_eq!(err.status(), None);
}

#[test]
fn unauthorized_is_detected_from_status() {
    let err = ApiError::Http { status: 401, message: "Token expirado".to_owned() };
    assert!(err.is_unauthorized());
}

#[test]
fn decode_and_encode_errors_are_prefixed() {
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid response: eof");
    assert_eq!(ApiError::Encode("nan".to_owned()).to_string(), "invalid request: nan");
}
