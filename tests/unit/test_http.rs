use reqwest::{Method, StatusCode};
use serde_json::json;
use sip_client::config::StatusPolicy;
use sip_client::error::AppError;
use sip_client::model::http::{RawResponse, StatusRules};

fn raw(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    }
}

fn rules(policy: StatusPolicy, detect_token_expiry: bool) -> StatusRules {
    StatusRules {
        policy,
        detect_token_expiry,
    }
}

const EXPIRED: &str = r#"{"msg": "Token has expired"}"#;

#[test]
fn test_success_statuses_pass() {
    for policy in [
        StatusPolicy::Passthrough,
        StatusPolicy::Uniform,
        StatusPolicy::ConflictAware,
    ] {
        for status in [200, 201, 202, 204, 299] {
            assert!(rules(policy, false).check(&raw(status, "{}")).is_ok());
        }
    }
}

#[test]
fn test_conflict_aware_distinguishes_409() {
    let result = rules(StatusPolicy::ConflictAware, false).check(&raw(409, "already exists"));
    match result {
        Err(AppError::Conflict(body)) => assert_eq!(body, "already exists"),
        other => panic!("Expected Conflict, got {other:?}"),
    }
}

#[test]
fn test_conflict_aware_other_failures() {
    for status in [300, 400, 401, 403, 404, 500, 503] {
        match rules(StatusPolicy::ConflictAware, false).check(&raw(status, "nope")) {
            Err(AppError::RequestFailed { status: s, body }) => {
                assert_eq!(s.as_u16(), status);
                assert_eq!(body, "nope");
            }
            other => panic!("Expected RequestFailed for {status}, got {other:?}"),
        }
    }
}

#[test]
fn test_uniform_does_not_distinguish_409() {
    match rules(StatusPolicy::Uniform, false).check(&raw(409, "already exists")) {
        Err(AppError::RequestFailed { status, body }) => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(body, "already exists");
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[test]
fn test_passthrough_accepts_failures() {
    for status in [400, 401, 404, 409, 500] {
        assert!(
            rules(StatusPolicy::Passthrough, true)
                .check(&raw(status, r#"{"msg": "nope"}"#))
                .is_ok()
        );
    }
}

#[test]
fn test_token_expiry_detected_before_policy() {
    for policy in [
        StatusPolicy::Passthrough,
        StatusPolicy::Uniform,
        StatusPolicy::ConflictAware,
    ] {
        let result = rules(policy, true).check(&raw(401, EXPIRED));
        assert!(matches!(result, Err(AppError::AccessTokenExpired)));
    }
}

#[test]
fn test_token_expiry_ignored_without_detection() {
    let result = rules(StatusPolicy::ConflictAware, false).check(&raw(401, EXPIRED));
    assert!(matches!(
        result,
        Err(AppError::RequestFailed {
            status: StatusCode::UNAUTHORIZED,
            ..
        })
    ));
}

#[test]
fn test_expiry_message_needs_401() {
    let result = rules(StatusPolicy::ConflictAware, true).check(&raw(403, EXPIRED));
    assert!(matches!(
        result,
        Err(AppError::RequestFailed {
            status: StatusCode::FORBIDDEN,
            ..
        })
    ));
}

#[test]
fn test_is_token_expired() {
    assert!(raw(401, EXPIRED).is_token_expired());
    assert!(!raw(401, r#"{"msg": "Bad credentials"}"#).is_token_expired());
    assert!(!raw(401, r#"{"message": "Token has expired"}"#).is_token_expired());
    assert!(!raw(401, "Token has expired").is_token_expired());
    assert!(!raw(401, "").is_token_expired());
}

#[test]
fn test_into_json_post_no_content() {
    let value = raw(204, "this is not json").into_json(&Method::POST).unwrap();
    assert!(value.is_null());
}

#[test]
fn test_into_json_parses_success_body() {
    let value = raw(201, r#"{"id": 7}"#).into_json(&Method::POST).unwrap();
    assert_eq!(value, json!({"id": 7}));

    let value = raw(200, "[1, 2]").into_json(&Method::GET).unwrap();
    assert_eq!(value, json!([1, 2]));
}

#[test]
fn test_into_json_no_content_only_special_for_post() {
    let result = raw(204, "").into_json(&Method::GET);
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_into_json_invalid_body() {
    let result = raw(200, "<html>").into_json(&Method::PUT);
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_into_json_non_json_failure_keeps_status_and_body() {
    let page = "<html><body>502 Bad Gateway</body></html>";

    match raw(502, page).into_json(&Method::GET) {
        Err(AppError::RequestFailed { status, body }) => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(body, page);
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[test]
fn test_into_json_json_failure_body_is_passed_through() {
    let value = raw(404, r#"{"msg": "not found"}"#)
        .into_json(&Method::GET)
        .unwrap();
    assert_eq!(value, json!({"msg": "not found"}));
}
