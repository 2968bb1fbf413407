use super::*;

fn envelope(success: Option<bool>, message: Option<&str>) -> ApiEnvelope {
    ApiEnvelope { success, message: message.map(str::to_owned) }
}

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    let api = UserApi::new("http://localhost:5000/api/v1/user/");
    assert_eq!(api.endpoint("/me"), "http://localhost:5000/api/v1/user/me");
    assert_eq!(api.endpoint("verify-otp"), "http://localhost:5000/api/v1/user/verify-otp");
}

#[test]
fn interpret_response_accepts_success_envelope() {
    let parsed = interpret_response(200, r#"{"success":true,"message":"ok","data":{}}"#);
    assert_eq!(parsed, Ok(envelope(Some(true), Some("ok"))));
}

#[test]
fn interpret_response_treats_empty_success_body_as_bare_envelope() {
    assert_eq!(interpret_response(204, ""), Ok(ApiEnvelope::default()));
}

#[test]
fn interpret_response_rejects_garbage_success_body() {
    assert!(matches!(interpret_response(200, "<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn interpret_response_prefers_server_message_on_error_status() {
    let parsed = interpret_response(401, r#"{"success":false,"message":"No valid session found"}"#);
    assert_eq!(
        parsed,
        Err(ApiError::Status { status: 401, message: "No valid session found".to_owned() })
    );
}

#[test]
fn interpret_response_falls_back_on_unparseable_error_body() {
    let parsed = interpret_response(502, "Bad Gateway");
    assert_eq!(parsed, Err(ApiError::Status { status: 502, message: status_failed_message(502) }));
}

#[test]
fn status_failed_message_formats_status() {
    assert_eq!(status_failed_message(500), "request failed with status 500");
}

#[test]
fn accept_not_rejected_passes_missing_success() {
    let result = accept(envelope(None, Some("Login berhasil")), Acceptance::NotRejected, "Login failed");
    assert_eq!(result, Ok(envelope(None, Some("Login berhasil"))));
}

#[test]
fn accept_not_rejected_fails_explicit_false() {
    let result = accept(envelope(Some(false), Some("Wrong password")), Acceptance::NotRejected, "Login failed");
    assert_eq!(result, Err(ApiError::Rejected("Wrong password".to_owned())));
}

#[test]
fn accept_explicit_requires_true() {
    let result = accept(envelope(None, None), Acceptance::Explicit, "Invalid OTP. Please try again.");
    assert_eq!(result, Err(ApiError::Rejected("Invalid OTP. Please try again.".to_owned())));
    assert!(accept(envelope(Some(true), None), Acceptance::Explicit, "unused").is_ok());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn calls_are_unavailable_outside_the_browser() {
    let api = UserApi::new("http://localhost:5000/api/v1/user");
    assert_eq!(api.me().await, Err(ApiError::Unavailable));
    assert_eq!(api.logout().await, Err(ApiError::Unavailable));
}
