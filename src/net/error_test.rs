use super::*;
use serde_json::json;

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_is_unauthorized_regardless_of_body() {
    assert_eq!(classify(401, &json!({"detail": "nope"})), ApiError::Unauthorized);
    assert_eq!(classify(401, &Value::Null), ApiError::Unauthorized);
}

#[test]
fn status_5xx_is_server_error() {
    assert_eq!(classify(500, &json!({"detail": "boom"})), ApiError::Server { status: 500 });
    assert_eq!(classify(503, &Value::Null), ApiError::Server { status: 503 });
}

#[test]
fn status_4xx_with_unrecognized_body_is_server_error() {
    assert_eq!(classify(400, &Value::Null), ApiError::Server { status: 400 });
    assert_eq!(classify(400, &json!(42)), ApiError::Server { status: 400 });
    assert_eq!(classify(400, &json!({})), ApiError::Server { status: 400 });
}

// =============================================================
// Field-keyed bodies
// =============================================================

#[test]
fn field_keyed_body_maps_to_fields() {
    let body = json!({
        "email": ["Enter a valid email address."],
        "password": ["This field may not be blank."]
    });
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.field("email").as_deref(), Some("Enter a valid email address."));
    assert_eq!(errors.field("password").as_deref(), Some("This field may not be blank."));
    assert_eq!(errors.general(), None);
}

#[test]
fn list_messages_for_one_field_are_joined() {
    let body = json!({"password1": ["Too short.", "Too common."]});
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.field("password1").as_deref(), Some("Too short. Too common."));
}

#[test]
fn non_field_errors_fold_into_general_message() {
    let body = json!({
        "non_field_errors": ["Unable to log in with provided credentials."],
        "email": ["Unknown address."]
    });
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.general().as_deref(),
        Some("Unable to log in with provided credentials.")
    );
    assert_eq!(errors.field("email").as_deref(), Some("Unknown address."));
}

#[test]
fn detail_key_is_treated_as_general() {
    let body = json!({"detail": "Not found."});
    let ApiError::Validation(errors) = classify(404, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.general().as_deref(), Some("Not found."));
}

// =============================================================
// List-of-strings bodies
// =============================================================

#[test]
fn bare_list_body_becomes_general_message() {
    let body = json!(["You already have a pending donation request"]);
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.general().as_deref(),
        Some("You already have a pending donation request")
    );
    assert!(errors.field("hospital").is_none());
}

#[test]
fn bare_string_body_becomes_general_message() {
    let ApiError::Validation(errors) = classify(400, &json!("rejected")) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.general().as_deref(), Some("rejected"));
}

// =============================================================
// FieldErrors helpers
// =============================================================

#[test]
fn renamed_moves_message_to_new_key() {
    let body = json!({"password1": ["Too short."], "password2": ["Mismatch."]});
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    let errors = errors
        .renamed("password1", "password")
        .renamed("password2", "confirm_password");
    assert_eq!(errors.field("password").as_deref(), Some("Too short."));
    assert_eq!(errors.field("confirm_password").as_deref(), Some("Mismatch."));
    assert!(errors.field("password1").is_none());
    assert!(errors.field("password2").is_none());
}

#[test]
fn renamed_missing_field_is_a_no_op() {
    let errors = FieldErrors::general_only("oops").renamed("a", "b");
    assert_eq!(errors.general().as_deref(), Some("oops"));
    assert!(errors.field("b").is_none());
}

#[test]
fn summary_prefers_general_message() {
    let errors = FieldErrors::general_only("Unable to log in.");
    assert_eq!(errors.summary(), "Unable to log in.");

    let body = json!({"email": ["bad"]});
    let ApiError::Validation(errors) = classify(400, &body) else {
        panic!("expected validation error");
    };
    assert_eq!(errors.summary(), "Please correct the highlighted fields.");
}

#[test]
fn error_display_is_user_facing() {
    assert!(ApiError::Network.to_string().contains("connection"));
    assert!(ApiError::Unauthorized.to_string().contains("sign in"));
    assert!(ApiError::Server { status: 502 }.to_string().contains("502"));
}
