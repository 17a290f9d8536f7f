use reqwest::StatusCode;
use sip_client::error::AppError;

#[test]
fn test_app_error_display_invalid_login() {
    let error = AppError::InvalidLogin;
    assert_eq!(error.to_string(), "invalid username or password");
}

#[test]
fn test_app_error_display_token_errors() {
    assert_eq!(
        AppError::AccessTokenExpired.to_string(),
        "access token has expired"
    );
    assert_eq!(
        AppError::RefreshTokenExpired.to_string(),
        "refresh token has expired"
    );
}

#[test]
fn test_app_error_display_conflict() {
    let error = AppError::Conflict(r#"{"error":"duplicate"}"#.to_string());
    assert_eq!(error.to_string(), r#"conflict: {"error":"duplicate"}"#);
}

#[test]
fn test_app_error_display_request_failed() {
    let error = AppError::RequestFailed {
        status: StatusCode::BAD_REQUEST,
        body: "bad field".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("400"));
    assert!(message.contains("bad field"));
}

#[test]
fn test_app_error_display_connection_failure() {
    let error = AppError::ConnectionFailure("sip:443: refused".to_string());
    assert_eq!(error.to_string(), "connection failure: sip:443: refused");
}

#[test]
fn test_app_error_body() {
    let conflict = AppError::Conflict("exists".to_string());
    assert_eq!(conflict.body(), Some("exists"));

    let failed = AppError::RequestFailed {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
    };
    assert_eq!(failed.body(), Some("boom"));

    assert_eq!(AppError::InvalidLogin.body(), None);
}

#[test]
fn test_app_error_is_token_expired() {
    assert!(AppError::AccessTokenExpired.is_token_expired());
    assert!(!AppError::RefreshTokenExpired.is_token_expired());
    assert!(!AppError::InvalidLogin.is_token_expired());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
