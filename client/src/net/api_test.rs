use super::*;

#[test]
fn status_error_formats_status() {
    assert_eq!(ApiError::Status(502).to_string(), "register request failed: 502");
}

#[test]
fn decode_register_body_accepts_field_errors_with_error_status() {
    let resp = decode_register_body(400, r#"{"error":{"email":"Email taken"}}"#).unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.get("email"), Some(&Some("Email taken".to_owned())));
}

#[test]
fn decode_register_body_maps_unparseable_error_status() {
    assert_eq!(decode_register_body(500, "<html>oops</html>"), Err(ApiError::Status(500)));
}

#[test]
fn decode_register_body_reports_garbage_on_success_status() {
    assert!(matches!(decode_register_body(200, "not json"), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn register_is_unavailable_without_browser() {
    let request = RegisterRequest {
        username: "u".to_owned(),
        email: "e".to_owned(),
        password: "p".to_owned(),
    };
    let result = futures::executor::block_on(register(request));
    assert_eq!(result, Err(ApiError::Unavailable));
}
