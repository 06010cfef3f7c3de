use super::*;

#[test]
fn extract_message_from_json_object() {
    assert_eq!(extract_message(r#"{"message":"Hotel already exists"}"#).as_deref(), Some("Hotel already exists"));
}

#[test]
fn extract_message_from_json_string_and_plain_text() {
    assert_eq!(extract_message(r#""bad email""#).as_deref(), Some("bad email"));
    assert_eq!(extract_message("Bad Request").as_deref(), Some("Bad Request"));
}

#[test]
fn extract_message_ignores_blank_and_other_shapes() {
    assert_eq!(extract_message(""), None);
    assert_eq!(extract_message("   "), None);
    assert_eq!(extract_message(r#"{"error":"x"}"#), None);
    assert_eq!(extract_message(r#"{"message":"  "}"#), None);
    assert_eq!(extract_message("[1,2]"), None);
}

#[test]
fn from_status_classifies_auth_failures() {
    let err = ApiError::from_status(401, "");
    assert_eq!(err, ApiError::Unauthorized { status: 401, message: None });
    assert!(err.is_auth_failure());
    assert!(ApiError::from_status(403, r#"{"message":"Forbidden"}"#).is_auth_failure());
}

#[test]
fn from_status_classifies_other_codes() {
    assert_eq!(ApiError::from_status(404, "nope"), ApiError::NotFound);
    assert_eq!(ApiError::from_status(400, ""), ApiError::Validation("Please check your input".to_owned()));
    assert_eq!(
        ApiError::from_status(500, r#"{"message":"db down"}"#),
        ApiError::Server { status: 500, message: "db down".to_owned() }
    );
    assert_eq!(
        ApiError::from_status(502, ""),
        ApiError::Server { status: 502, message: "Something went wrong".to_owned() }
    );
}

#[test]
fn non_http_errors_are_not_auth_failures() {
    for err in [ApiError::Network("offline".to_owned()), ApiError::Decode("eof".to_owned()), ApiError::Unavailable] {
        assert!(!err.is_auth_failure());
        assert_eq!(err.status(), None);
    }
}

#[test]
fn server_message_exposes_body_text() {
    assert_eq!(ApiError::Validation("dup".to_owned()).server_message(), Some("dup"));
    assert_eq!(ApiError::NotFound.server_message(), None);
}
