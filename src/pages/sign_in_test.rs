use serde_json::json;

use super::sign_in_errors;
use crate::net::error::{ApiError, FieldErrors, classify};

#[test]
fn rejected_credentials_read_as_invalid_login_not_expired_session() {
    let errors = sign_in_errors(ApiError::Unauthorized);
    let message = errors.general().unwrap();
    assert_eq!(message, "Invalid email or password. Please try again.");
    assert!(!message.contains("session"));
}

#[test]
fn field_keyed_errors_pass_through_unchanged() {
    let body = json!({"email": ["Enter a valid email address."]});
    let ApiError::Validation(fields) = classify(400, &body) else {
        panic!("expected a validation error");
    };
    let errors = sign_in_errors(ApiError::Validation(fields.clone()));
    assert_eq!(errors, fields);
    assert_eq!(
        errors.field("email").as_deref(),
        Some("Enter a valid email address.")
    );
}

#[test]
fn other_failures_become_a_general_message() {
    let errors = sign_in_errors(ApiError::Server { status: 502 });
    assert!(errors.general().unwrap().contains("502"));
    assert_eq!(errors, FieldErrors::general_only(errors.general().unwrap()));
}
